mod operations;
mod traversal;
mod types;

pub use traversal::NodeSnapshot;
pub use types::*;
