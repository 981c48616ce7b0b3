// MIT/Apache2 License

use super::id::{NodeId, INVALID};
use super::traverse::Children;
use crate::{Error, Result};

/// What a node in the layer tree is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A layer holding actual pixel content.
    Paint,
    /// An organizational node containing other nodes.
    Group,
    /// A layer that renders a filter over the layers below it.
    Filter,
}

#[derive(Debug, Clone)]
pub(crate) struct Slot {
    kind: NodeKind,
    name: String,
    visible: bool,
    generation: u32,
    alive: bool,

    parent: u32,
    first_child: u32,
    last_child: u32,
    pub(crate) prev_sibling: u32,
    pub(crate) next_sibling: u32,
}

impl Slot {
    #[inline]
    fn new(kind: NodeKind, name: String, generation: u32) -> Self {
        Self {
            kind,
            name,
            visible: true,
            generation,
            alive: true,
            parent: INVALID,
            first_child: INVALID,
            last_child: INVALID,
            prev_sibling: INVALID,
            next_sibling: INVALID,
        }
    }
}

/// The tree of layers making up an image.
///
/// The tree owns every node. A root group node is created along with the tree and can never
/// be destroyed or moved. Nodes created with [`create_node`](Self::create_node) are detached
/// until they are added to a group.
#[derive(Debug, Clone)]
pub struct LayerTree {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    root: u32,
}

impl Default for LayerTree {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl LayerTree {
    /// Create a tree holding only an empty root group.
    pub fn new() -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            root: INVALID,
        };
        tree.root = tree.create_node(NodeKind::Group, "root").index;
        tree
    }

    /// The root group of the tree.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.id_at(self.root)
    }

    /* Allocation */

    /// Create a new detached node.
    pub fn create_node(&mut self, kind: NodeKind, name: impl Into<String>) -> NodeId {
        let name = name.into();
        let index = match self.free_list.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                *slot = Slot::new(kind, name, slot.generation.wrapping_add(1));
                index
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot::new(kind, name, 0));
                index
            }
        };

        self.id_at(index)
    }

    /// Create a new node and add it on top of `parent`'s children.
    pub fn add_layer(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        name: impl Into<String>,
    ) -> Result<NodeId> {
        self.validate(parent)?;
        let node = self.create_node(kind, name);
        match self.add_child(parent, node) {
            Ok(()) => Ok(node),
            Err(err) => {
                // the node is still detached and childless
                self.free(node.index);
                Err(err)
            }
        }
    }

    /// Destroy a node, making every handle to it stale.
    ///
    /// The node is detached from its parent first. Nodes that still have children cannot be
    /// destroyed, and neither can the root.
    pub fn destroy(&mut self, node: NodeId) -> Result {
        self.validate(node)?;
        if node.index == self.root {
            return Err(Error::InvalidTopology("the root cannot be destroyed"));
        }
        if self.slot(node.index).first_child != INVALID {
            return Err(Error::InvalidTopology("cannot destroy a node with children"));
        }

        if self.slot(node.index).parent != INVALID {
            self.unlink(node.index);
        }
        self.free(node.index);
        Ok(())
    }

    #[inline]
    fn free(&mut self, index: u32) {
        let slot = &mut self.slots[index as usize];
        slot.alive = false;
        slot.name.clear();
        self.free_list.push(index);
    }

    /// Tell if the handle refers to a live node.
    #[inline]
    pub fn is_alive(&self, node: NodeId) -> bool {
        self.slots
            .get(node.index as usize)
            .map_or(false, |slot| slot.alive && slot.generation == node.generation)
    }

    /* Topology */

    /// Add a detached node on top of `parent`'s children.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result {
        self.validate(parent)?;
        self.validate(child)?;
        self.check_link(parent.index, child.index)?;

        let last = self.slot(parent.index).last_child;
        self.link_after(parent.index, last, child.index);
        Ok(())
    }

    /// Add a detached node directly above `sibling`, under the same parent.
    pub fn insert_above(&mut self, sibling: NodeId, node: NodeId) -> Result {
        self.validate(sibling)?;
        self.validate(node)?;
        let p = self.slot(sibling.index).parent;
        if p == INVALID {
            return Err(Error::InvalidTopology("sibling has no parent"));
        }
        self.check_link(p, node.index)?;

        self.link_after(p, sibling.index, node.index);
        Ok(())
    }

    fn check_link(&self, p: u32, c: u32) -> Result {
        if self.slot(p).kind != NodeKind::Group {
            return Err(Error::InvalidTopology("only groups can have children"));
        }
        if c == self.root {
            return Err(Error::InvalidTopology("the root cannot be a child"));
        }
        if self.slot(c).parent != INVALID {
            return Err(Error::InvalidTopology("node already has a parent"));
        }
        if self.is_ancestor(c, p) {
            return Err(Error::InvalidTopology("node cannot be added below itself"));
        }
        Ok(())
    }

    /// Link `c` into `p`'s children right after `prev`, or at the bottom if `prev` is INVALID.
    fn link_after(&mut self, p: u32, prev: u32, c: u32) {
        let next = if prev == INVALID {
            self.slot(p).first_child
        } else {
            self.slot(prev).next_sibling
        };

        {
            let slot = self.slot_mut(c);
            slot.parent = p;
            slot.prev_sibling = prev;
            slot.next_sibling = next;
        }
        if prev == INVALID {
            self.slot_mut(p).first_child = c;
        } else {
            self.slot_mut(prev).next_sibling = c;
        }
        if next == INVALID {
            self.slot_mut(p).last_child = c;
        } else {
            self.slot_mut(next).prev_sibling = c;
        }
    }

    /// Remove a node from its parent, keeping its own children.
    pub fn detach(&mut self, node: NodeId) -> Result {
        self.validate(node)?;
        if self.slot(node.index).parent == INVALID {
            return Err(Error::InvalidTopology("node has no parent"));
        }
        self.unlink(node.index);
        Ok(())
    }

    fn unlink(&mut self, c: u32) {
        let (p, prev, next) = {
            let slot = self.slot(c);
            (slot.parent, slot.prev_sibling, slot.next_sibling)
        };

        if prev == INVALID {
            self.slot_mut(p).first_child = next;
        } else {
            self.slot_mut(prev).next_sibling = next;
        }
        if next == INVALID {
            self.slot_mut(p).last_child = prev;
        } else {
            self.slot_mut(next).prev_sibling = prev;
        }

        let slot = self.slot_mut(c);
        slot.parent = INVALID;
        slot.prev_sibling = INVALID;
        slot.next_sibling = INVALID;
    }

    /// Tell if `ancestor` is `node` or one of its ancestors.
    fn is_ancestor(&self, ancestor: u32, mut node: u32) -> bool {
        while node != INVALID {
            if node == ancestor {
                return true;
            }
            node = self.slot(node).parent;
        }
        false
    }

    /* Queries */

    #[inline]
    pub fn kind(&self, node: NodeId) -> Option<NodeKind> {
        self.get(node).map(|slot| slot.kind)
    }

    #[inline]
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|slot| slot.name.as_str())
    }

    #[inline]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.link(node, |slot| slot.parent)
    }

    /// The bottom-most child of a node.
    #[inline]
    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.link(node, |slot| slot.first_child)
    }

    /// The top-most child of a node.
    #[inline]
    pub fn last_child(&self, node: NodeId) -> Option<NodeId> {
        self.link(node, |slot| slot.last_child)
    }

    /// The sibling directly below a node.
    #[inline]
    pub fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.link(node, |slot| slot.prev_sibling)
    }

    /// The sibling directly above a node.
    #[inline]
    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.link(node, |slot| slot.next_sibling)
    }

    /// Iterate over the direct children of a node, bottom to top.
    ///
    /// A stale handle yields no children.
    #[inline]
    pub fn children(&self, node: NodeId) -> Children<'_> {
        match self.get(node) {
            Some(slot) => Children::new(self, slot.first_child, slot.last_child),
            None => Children::new(self, INVALID, INVALID),
        }
    }

    /// Set the node's own visibility flag.
    pub fn set_visible(&mut self, node: NodeId, visible: bool) -> Result {
        self.validate(node)?;
        self.slot_mut(node.index).visible = visible;
        Ok(())
    }

    /// Tell if a node is visible.
    ///
    /// If `recursive` is true, the node only counts as visible if every ancestor is visible
    /// too. Stale handles are never visible.
    pub fn is_visible(&self, node: NodeId, recursive: bool) -> bool {
        let slot = match self.get(node) {
            Some(slot) => slot,
            None => return false,
        };
        if !recursive {
            return slot.visible;
        }

        let mut current = node.index;
        while current != INVALID {
            let slot = self.slot(current);
            if !slot.visible {
                return false;
            }
            current = slot.parent;
        }
        true
    }

    /// View the node as a paint layer, if it is one.
    #[inline]
    pub fn as_paint_layer(&self, node: NodeId) -> Option<PaintLayer<'_>> {
        match self.kind(node)? {
            NodeKind::Paint => Some(PaintLayer { tree: self, node }),
            _ => None,
        }
    }

    /* Internals */

    #[inline]
    fn validate(&self, node: NodeId) -> Result {
        if self.is_alive(node) {
            Ok(())
        } else {
            Err(Error::StaleNode(node))
        }
    }

    #[inline]
    fn get(&self, node: NodeId) -> Option<&Slot> {
        if self.is_alive(node) {
            Some(self.slot(node.index))
        } else {
            None
        }
    }

    #[inline]
    fn link(&self, node: NodeId, f: impl FnOnce(&Slot) -> u32) -> Option<NodeId> {
        let index = f(self.get(node)?);
        if index == INVALID {
            None
        } else {
            Some(self.id_at(index))
        }
    }

    #[inline]
    pub(crate) fn slot(&self, index: u32) -> &Slot {
        &self.slots[index as usize]
    }

    #[inline]
    fn slot_mut(&mut self, index: u32) -> &mut Slot {
        &mut self.slots[index as usize]
    }

    #[inline]
    pub(crate) fn id_at(&self, index: u32) -> NodeId {
        NodeId {
            index,
            generation: self.slot(index).generation,
        }
    }
}

/// A read-only view of a node known to be a paint layer.
#[derive(Debug, Copy, Clone)]
pub struct PaintLayer<'a> {
    tree: &'a LayerTree,
    node: NodeId,
}

impl<'a> PaintLayer<'a> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.node
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        self.tree.name(self.node).unwrap_or_default()
    }

    /// See [`LayerTree::is_visible`].
    #[inline]
    pub fn is_visible(&self, recursive: bool) -> bool {
        self.tree.is_visible(self.node, recursive)
    }
}
