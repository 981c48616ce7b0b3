// MIT/Apache2 License

//! Resolving which layers a filter plugin reads from.

use crate::{LayerTree, NodeId};
use std::{convert::TryFrom, fmt};

/// Which layers a filter plugin asks to receive as input.
///
/// The numeric codes follow the G'MIC host protocol; see [`InputLayerMode::code`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InputLayerMode {
    /// No layers at all.
    NoInput,
    /// Only the active layer.
    Active,
    /// Every paint layer.
    All,
    /// The active layer and the layer below it.
    ActiveAndBelow,
    /// The active layer and the layer above it.
    ActiveAndAbove,
    /// Every visible paint layer.
    AllVisible,
    /// Every invisible paint layer.
    AllInvisible,
    /// Every visible paint layer, in descending order. No longer supported.
    AllVisiblesDescDeprecated,
    /// Every invisible paint layer, in descending order. No longer supported.
    AllInvisiblesDescDeprecated,
    /// Every paint layer, in descending order. No longer supported.
    AllDescDeprecated,
    /// The plugin did not say.
    Unspecified,
}

impl InputLayerMode {
    /// The code of this mode in the plugin protocol.
    #[inline]
    pub fn code(self) -> u32 {
        match self {
            Self::NoInput => 0,
            Self::Active => 1,
            Self::All => 2,
            Self::ActiveAndBelow => 3,
            Self::ActiveAndAbove => 4,
            Self::AllVisible => 5,
            Self::AllInvisible => 6,
            Self::AllVisiblesDescDeprecated => 7,
            Self::AllInvisiblesDescDeprecated => 8,
            Self::AllDescDeprecated => 9,
            Self::Unspecified => 100,
        }
    }

    /// Look up a mode by its protocol code.
    #[inline]
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            0 => Self::NoInput,
            1 => Self::Active,
            2 => Self::All,
            3 => Self::ActiveAndBelow,
            4 => Self::ActiveAndAbove,
            5 => Self::AllVisible,
            6 => Self::AllInvisible,
            7 => Self::AllVisiblesDescDeprecated,
            8 => Self::AllInvisiblesDescDeprecated,
            9 => Self::AllDescDeprecated,
            100 => Self::Unspecified,
            _ => return None,
        })
    }

    /// Tell if this mode used to be supported but is no longer.
    #[inline]
    pub fn is_deprecated(self) -> bool {
        matches!(
            self,
            Self::AllVisiblesDescDeprecated
                | Self::AllInvisiblesDescDeprecated
                | Self::AllDescDeprecated
        )
    }
}

impl TryFrom<u32> for InputLayerMode {
    type Error = u32;

    #[inline]
    fn try_from(code: u32) -> Result<Self, u32> {
        Self::from_code(code).ok_or(code)
    }
}

impl fmt::Display for InputLayerMode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}

/// Maps the input mode requested by a filter plugin onto the layers of an image.
///
/// The mapper only reads the tree. It never fails: modes it cannot serve resolve to an empty
/// list and log a warning.
#[derive(Debug, Copy, Clone)]
pub struct InputOutputMapper<'a> {
    tree: &'a LayerTree,
    active: NodeId,
}

impl<'a> InputOutputMapper<'a> {
    /// Create a mapper for an image's layer tree and its active layer.
    #[inline]
    pub fn new(tree: &'a LayerTree, active: NodeId) -> Self {
        Self { tree, active }
    }

    #[inline]
    pub fn active_node(&self) -> NodeId {
        self.active
    }

    /// Get the layers a plugin should read from for the given mode.
    pub fn input_nodes(&self, mode: InputLayerMode) -> Vec<NodeId> {
        let mut result = Vec::new();

        match mode {
            InputLayerMode::NoInput => {}
            InputLayerMode::Active => result.push(self.active),
            InputLayerMode::ActiveAndBelow => {
                result.push(self.active);
                result.extend(self.tree.prev_sibling(self.active));
            }
            InputLayerMode::ActiveAndAbove => {
                result.push(self.active);
                result.extend(self.tree.next_sibling(self.active));
            }
            InputLayerMode::All => self.all_layers(&mut result, None),
            InputLayerMode::AllVisible => self.all_layers(&mut result, Some(true)),
            InputLayerMode::AllInvisible => self.all_layers(&mut result, Some(false)),
            mode if mode.is_deprecated() => {
                log::warn!("Input mode {} is not supported by G'MIC anymore", mode);
            }
            mode => {
                log::warn!(
                    "Input mode {} must be specified by G'MIC or is not implemented",
                    mode
                );
            }
        }

        result
    }

    /// Get the layers for a raw protocol code. Unknown codes resolve to no layers.
    pub fn input_nodes_for_code(&self, code: u32) -> Vec<NodeId> {
        match InputLayerMode::from_code(code) {
            Some(mode) => self.input_nodes(mode),
            None => {
                log::warn!(
                    "Input mode {} must be specified by G'MIC or is not implemented",
                    code
                );
                Vec::new()
            }
        }
    }

    /// Collect the paint layers directly below the root, top to bottom.
    ///
    /// Layers nested inside of groups are not looked at; plugins only ever see the top level
    /// of the image.
    fn all_layers(&self, result: &mut Vec<NodeId>, visible: Option<bool>) {
        let tree = self.tree;
        result.extend(
            tree.children(tree.root())
                .rev()
                .filter_map(|node| tree.as_paint_layer(node))
                .filter(|layer| visible.map_or(true, |v| layer.is_visible(true) == v))
                .map(|layer| layer.id()),
        );
    }
}
