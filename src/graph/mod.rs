//! Mentions data to typed, weighted, sized graph.

mod builder;
mod category;
mod error;
mod input;
mod model;
mod scale;

pub use builder::{EDGE_SIZE_RANGE, GraphBuild, GraphStats, NODE_SIZE_RANGE, build_graph};
pub use category::Category;
pub use error::GraphError;
pub use input::{MentionRecord, MentionsMap, parse_snapshot};
pub use model::{EDGE_COLOR, Edge, EdgeAttributes, MentionGraph, Node, NodeAttributes};
pub use scale::LinearScale;
