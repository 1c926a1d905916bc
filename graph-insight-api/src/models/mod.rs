pub mod classify;
pub mod path;
pub mod traversal;
pub mod visualize;

pub use classify::{ClassificationReport, ClassifyRequest, ClassifyResponse};
pub use path::{ShortestPathRequest, ShortestPathResponse};
pub use traversal::TraverseRequest;
pub use visualize::{VisualizeRequest, VisualizeResponse};
