//! Concrete problem domains and their search adapters.
//!
//! Each world validates its input once, at construction. A constructed
//! instance is always searchable; the drivers never see malformed data.

pub mod coloring;
pub mod knapsack;
pub mod puzzle;

/// Input rejected before any search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A puzzle board did not have exactly 16 cells.
    BoardLength { actual: usize },
    /// A board cell held something other than an integer tile.
    TileNotANumber { index: usize, raw: String },
    /// A tile outside `0..=15`.
    TileOutOfRange { index: usize, tile: u32 },
    /// A tile appeared more than once.
    DuplicateTile { tile: u8 },
    EmptyItemId { index: usize },
    DuplicateItemId { id: String },
    ZeroItemWeight { id: String },
    ZeroItemValue { id: String },
    EmptyVertexSet,
    DuplicateVertex { vertex: String },
    UnknownEdgeVertex { vertex: String },
    SelfLoop { vertex: String },
    /// At least one color is required.
    ZeroPalette,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BoardLength { actual } => {
                write!(f, "board must have exactly 16 tiles, got {actual}")
            }
            Self::TileNotANumber { index, raw } => {
                write!(f, "tile {index} is not a number: {raw:?}")
            }
            Self::TileOutOfRange { index, tile } => {
                write!(f, "tile {index} is {tile}, expected 0..=15")
            }
            Self::DuplicateTile { tile } => write!(f, "tile {tile} appears more than once"),
            Self::EmptyItemId { index } => write!(f, "item {index} has an empty id"),
            Self::DuplicateItemId { id } => write!(f, "item id {id:?} is used more than once"),
            Self::ZeroItemWeight { id } => write!(f, "item {id:?} has zero weight"),
            Self::ZeroItemValue { id } => write!(f, "item {id:?} has zero value"),
            Self::EmptyVertexSet => f.write_str("graph has no vertices"),
            Self::DuplicateVertex { vertex } => write!(f, "vertex {vertex:?} is listed twice"),
            Self::UnknownEdgeVertex { vertex } => {
                write!(f, "edge references unknown vertex {vertex:?}")
            }
            Self::SelfLoop { vertex } => write!(f, "vertex {vertex:?} has a self-loop"),
            Self::ZeroPalette => f.write_str("at least one color is required"),
        }
    }
}

impl std::error::Error for ValidationError {}
