pub mod generator;
pub mod policy;

mod decompose;
mod path_query;
mod segment_tree;
mod tree;

pub use decompose::HeavyLight;
pub use path_query::HldTree;
pub use segment_tree::SegmentTree;
pub use tree::{Tree, TreeError};
