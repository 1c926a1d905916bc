use graph_insight::{render_graph, RenderOptions};

use crate::{
    error::ApiResult,
    models::{VisualizeRequest, VisualizeResponse},
};

/// Renders edge lists with optional traversal highlights
pub struct VisualizationService {
    options: RenderOptions,
}

impl VisualizationService {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(&self, request: &VisualizeRequest) -> ApiResult<VisualizeResponse> {
        if request.edges.is_empty() {
            return Ok(VisualizeResponse::failure("No graph data provided"));
        }

        let mut options = self.options.clone();
        if let Some(format) = request.format {
            options.format = format;
        }

        let image = render_graph(&request.edges, &request.highlights(), &options)?;
        Ok(match image {
            Some(image) => VisualizeResponse::image(image.data_url()),
            None => VisualizeResponse::failure("No graph data provided"),
        })
    }
}

impl Default for VisualizationService {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
