/// Graph rendering
///
/// Lays the graph out with `spring_layout`, draws it with plotters and
/// encodes the result for transport. The same drawing routine feeds two
/// backends:
/// - PNG: plotters bitmap backend into an RGB buffer, encoded with `image`
/// - SVG: plotters SVG backend into a string
///
/// Node labels use an embedded DejaVu Sans Bold face registered with the
/// plotters `ab_glyph` font engine on first use.

use crate::layout::{spring_layout, LayoutOptions, Point};
use crate::types::{EdgeList, NodeId};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

const BACKGROUND: RGBColor = RGBColor(0xf8, 0xfa, 0xfc);
const EDGE_COLOR: RGBColor = RGBColor(0xe2, 0xe8, 0xf0);
const CURRENT_EDGE_COLOR: RGBColor = RGBColor(0xef, 0x44, 0x44);
const NODE_COLOR: RGBColor = RGBColor(0xff, 0xff, 0xff);
const VISITED_COLOR: RGBColor = RGBColor(0x10, 0xb9, 0x81);
const CURRENT_COLOR: RGBColor = RGBColor(0x3b, 0x82, 0xf6);
const OUTLINE_COLOR: RGBColor = RGBColor(0x64, 0x74, 0x8b);
const LABEL_COLOR: RGBColor = RGBColor(0x1e, 0x29, 0x3b);

const LABEL_FONT: &str = "sans-serif";
static LABEL_FONT_DATA: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

/// Half-width of the visible canvas in layout units
const VIEW_EXTENT: f64 = 1.2;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render options: {0}")]
    InvalidOptions(String),

    #[error("Drawing failed: {0}")]
    Drawing(String),

    #[error("Image encoding failed: {0}")]
    Encoding(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Output image format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Svg => "image/svg+xml",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            other => Err(RenderError::InvalidOptions(format!(
                "unsupported image format: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Png => f.write_str("png"),
            ImageFormat::Svg => f.write_str("svg"),
        }
    }
}

/// Reference to the edge being highlighted
///
/// Either an edge id `"a-b"` or an explicit `[a, b]` pair. Both match the
/// edge in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeSelector {
    Id(String),
    Pair(NodeId, NodeId),
}

impl EdgeSelector {
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            EdgeSelector::Id(id) => *id == format!("{}-{}", a, b) || *id == format!("{}-{}", b, a),
            EdgeSelector::Pair(x, y) => {
                (x.as_str() == a && y.as_str() == b) || (x.as_str() == b && y.as_str() == a)
            }
        }
    }
}

/// Traversal state to paint on top of the graph
#[derive(Debug, Clone, Default)]
pub struct Highlights {
    pub visited: HashSet<NodeId>,
    pub current_node: Option<NodeId>,
    pub current_edge: Option<EdgeSelector>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState {
    Default,
    Visited,
    Current,
}

impl Highlights {
    fn node_state(&self, node: &str) -> NodeState {
        if self.current_node.as_ref().is_some_and(|c| c.as_str() == node) {
            NodeState::Current
        } else if self.visited.contains(node) {
            NodeState::Visited
        } else {
            NodeState::Default
        }
    }

    fn is_current_edge(&self, a: &str, b: &str) -> bool {
        self.current_edge
            .as_ref()
            .is_some_and(|selector| selector.matches(a, b))
    }
}

/// Rendering parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub layout: LayoutOptions,
    /// Draw node names inside the circles
    #[serde(default = "default_labels")]
    pub labels: bool,
}

fn default_labels() -> bool {
    true
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            format: ImageFormat::Png,
            layout: LayoutOptions::default(),
            labels: true,
        }
    }
}

/// Encoded image
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl RenderedImage {
    /// `data:` URL suitable for an `<img src>`
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            STANDARD.encode(&self.bytes)
        )
    }
}

struct SceneEdge {
    from: (i32, i32),
    to: (i32, i32),
    current: bool,
}

struct SceneNode {
    center: (i32, i32),
    label: String,
    state: NodeState,
}

struct Scene {
    edges: Vec<SceneEdge>,
    nodes: Vec<SceneNode>,
    scale: f64,
}

impl Scene {
    fn build(edges: &EdgeList, highlights: &Highlights, options: &RenderOptions) -> Scene {
        let layout = spring_layout(edges, &options.layout);
        let (width, height) = (options.width as f64, options.height as f64);
        let to_pixel = |p: Point| -> (i32, i32) {
            let x = (p.x + VIEW_EXTENT) / (2.0 * VIEW_EXTENT) * width;
            let y = (VIEW_EXTENT - p.y) / (2.0 * VIEW_EXTENT) * height;
            (x.round() as i32, y.round() as i32)
        };

        let graph = edges.to_undirected();
        let scene_edges = graph
            .all_edges()
            .filter_map(|(a, b, _)| {
                let from = layout.position(a)?;
                let to = layout.position(b)?;
                Some(SceneEdge {
                    from: to_pixel(from),
                    to: to_pixel(to),
                    current: highlights.is_current_edge(a, b),
                })
            })
            .collect();

        let scene_nodes = layout
            .iter()
            .map(|(node, position)| SceneNode {
                center: to_pixel(position),
                label: node.to_string(),
                state: highlights.node_state(node.as_str()),
            })
            .collect();

        Scene {
            edges: scene_edges,
            nodes: scene_nodes,
            scale: (width.min(height) / 800.0).max(0.25),
        }
    }

    fn scaled(&self, value: f64) -> u32 {
        (value * self.scale).round().max(1.0) as u32
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        labels: bool,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&BACKGROUND)?;

        for edge in &self.edges {
            let (color, width) = if edge.current {
                (CURRENT_EDGE_COLOR, self.scaled(4.0))
            } else {
                (EDGE_COLOR, self.scaled(2.0))
            };
            root.draw(&PathElement::new(
                vec![edge.from, edge.to],
                color.mix(0.8).stroke_width(width),
            ))?;
        }

        let font_size = 16.0 * self.scale;
        for node in &self.nodes {
            let (fill, radius) = match node.state {
                NodeState::Current => (CURRENT_COLOR, self.scaled(26.0)),
                NodeState::Visited => (VISITED_COLOR, self.scaled(24.0)),
                NodeState::Default => (NODE_COLOR, self.scaled(22.0)),
            };
            root.draw(&Circle::new(node.center, radius, fill.mix(0.95).filled()))?;
            root.draw(&Circle::new(
                node.center,
                radius,
                OUTLINE_COLOR.stroke_width(self.scaled(3.0)),
            ))?;

            if !labels {
                continue;
            }
            let style = (LABEL_FONT, font_size)
                .into_font()
                .style(FontStyle::Bold)
                .color(&LABEL_COLOR)
                .pos(Pos::new(HPos::Center, VPos::Center));
            root.draw(&Text::new(node.label.as_str(), node.center, style))?;
        }

        Ok(())
    }
}

/// Render the graph, or `None` when there is nothing to draw
pub fn render_graph(
    edges: &EdgeList,
    highlights: &Highlights,
    options: &RenderOptions,
) -> RenderResult<Option<RenderedImage>> {
    if edges.is_empty() {
        return Ok(None);
    }
    if options.width == 0 || options.height == 0 {
        return Err(RenderError::InvalidOptions(format!(
            "image size {}x{} is empty",
            options.width, options.height
        )));
    }

    if options.labels {
        register_label_font()?;
    }

    let scene = Scene::build(edges, highlights, options);
    let bytes = match options.format {
        ImageFormat::Png => render_png(&scene, options)?,
        ImageFormat::Svg => render_svg(&scene, options)?,
    };

    tracing::debug!(
        format = %options.format,
        nodes = scene.nodes.len(),
        edges = scene.edges.len(),
        bytes = bytes.len(),
        "rendered graph"
    );

    Ok(Some(RenderedImage {
        format: options.format,
        bytes,
    }))
}

/// Register the label face once per process
fn register_label_font() -> RenderResult<()> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

    REGISTERED
        .get_or_init(|| {
            plotters::style::register_font(LABEL_FONT, FontStyle::Bold, LABEL_FONT_DATA)
                .map_err(|_| "invalid label font".to_string())
        })
        .clone()
        .map_err(RenderError::Drawing)
}

fn render_png(scene: &Scene, options: &RenderOptions) -> RenderResult<Vec<u8>> {
    let (width, height) = (options.width, options.height);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        scene
            .draw(&root, options.labels)
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
        root.present()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(&buffer, width, height, ExtendedColorType::Rgb8)?;
    Ok(png)
}

fn render_svg(scene: &Scene, options: &RenderOptions) -> RenderResult<Vec<u8>> {
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (options.width, options.height)).into_drawing_area();
        scene
            .draw(&root, options.labels)
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
        root.present()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
    }
    Ok(svg.into_bytes())
}
