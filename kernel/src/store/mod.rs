//! SearchNode store: arena-backed search tree with parent links.
//!
//! Nothing in `store` depends on `proof`.

pub mod arena;
pub mod node;

pub use arena::NodeStore;
pub use node::{NodeId, NodeStatus, SearchNode};
