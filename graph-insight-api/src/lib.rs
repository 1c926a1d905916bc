pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{ApiError, ApiResult};

use axum::{
    routing::{get, post},
    Router,
};
use handlers::{classify, health, path, traversal, visualize};
use services::{AnalysisService, ClassificationService, VisualizationService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub classification_service: Arc<ClassificationService>,
    pub analysis_service: Arc<AnalysisService>,
    pub visualization_service: Arc<VisualizationService>,
}

impl AppState {
    /// Build every service from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            classification_service: Arc::new(ClassificationService::from_config(
                &config.classifier,
            )),
            analysis_service: Arc::new(AnalysisService::new()),
            visualization_service: Arc::new(VisualizationService::new(
                config.render.render_options(),
            )),
        }
    }
}

/// Routes of the service, without middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Graph endpoints
        .route("/classify", post(classify::classify_graph))
        .route("/shortest_path", post(path::find_shortest_path))
        .route("/generate_graph", post(visualize::generate_graph))
        .route("/traverse", post(traversal::traverse_graph))
        .with_state(state)
}
