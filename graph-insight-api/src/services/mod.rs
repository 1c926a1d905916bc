pub mod analysis;
pub mod classification;
pub mod visualization;

pub use analysis::AnalysisService;
pub use classification::ClassificationService;
pub use visualization::VisualizationService;
