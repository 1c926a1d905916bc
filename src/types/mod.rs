/// Core data types
///
/// This module defines the values every request is built from:
/// - NodeId: textual node identifier (accepts JSON strings and numbers)
/// - Edge: validated `[source, target]` pair
/// - EdgeList: ordered edge sequence with undirected/directed graph views
/// - GraphPath: sequence of nodes and edges forming a walk

pub mod edge;
pub mod edge_list;
pub mod node;
pub mod path;

pub use edge::Edge;
pub use edge_list::EdgeList;
pub use node::NodeId;
pub use path::{GraphPath, PathError};
