use crate::curve::heart::HeartCurve;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{HeartError, HeartResult};

/// Caption text baked into the generator (the viewer takes it as a flag).
pub const DEFAULT_CAPTION: &str = "I love my husband";

/// Default square output canvas, in pixels.
pub const DEFAULT_CANVAS: Canvas = Canvas {
    width: 650,
    height: 650,
};

/// Marker cadence: one curve point per frame at 50 fps.
pub const ANIMATION_FPS: Fps = Fps { num: 50, den: 1 };

/// Curve outline color (crimson), straight-alpha RGBA8.
pub const OUTLINE_RGBA: [u8; 4] = [220, 20, 60, 255];
/// Discrete point color: crimson at 90% opacity.
pub const POINT_RGBA: [u8; 4] = [220, 20, 60, 230];
/// Traveling marker fill (goldenrod).
pub const MARKER_FILL_RGBA: [u8; 4] = [218, 165, 32, 255];
/// Traveling marker rim.
pub const MARKER_RIM_RGBA: [u8; 4] = [0, 0, 0, 255];
/// Caption fill (dark red) as an SVG hex color.
pub const CAPTION_FILL: &str = "#8b0000";
/// Background all frames are flattened over.
pub const BACKGROUND_RGBA: [u8; 4] = [255, 255, 255, 255];

/// Outline stroke width in canvas pixels.
pub const OUTLINE_STROKE_PX: f64 = 2.5;
/// Discrete point disc radius in canvas pixels.
pub const POINT_RADIUS_PX: f64 = 2.2;
/// Marker rim stroke width in canvas pixels.
pub const MARKER_RIM_PX: f64 = 0.8;
/// Marker radius as a fraction of the larger margined-bounds dimension.
pub const MARKER_RADIUS_FRACTION: f64 = 0.03;
/// Caption baseline height inside the margined bounds, from the bottom.
pub const CAPTION_HEIGHT_FRACTION: f64 = 0.18;
/// Caption font size as a fraction of canvas height.
pub const CAPTION_SIZE_FRACTION: f64 = 0.04;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How the curve geometry is drawn.
pub enum RenderStyle {
    /// A connected path through all points in order.
    #[default]
    Line,
    /// Unconnected discs at each coordinate.
    Points,
    /// Both overlaid.
    Both,
}

impl RenderStyle {
    /// Parse a style name as accepted on the command line.
    pub fn parse(s: &str) -> HeartResult<Self> {
        match s {
            "line" => Ok(Self::Line),
            "points" => Ok(Self::Points),
            "both" => Ok(Self::Both),
            other => Err(HeartError::validation(format!(
                "unknown style '{other}' (expected line, points or both)"
            ))),
        }
    }

    /// Whether the connected outline is drawn.
    pub fn draws_line(self) -> bool {
        matches!(self, Self::Line | Self::Both)
    }

    /// Whether discrete point discs are drawn.
    pub fn draws_points(self) -> bool {
        matches!(self, Self::Points | Self::Both)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete description of one rendered view of a heart curve.
///
/// A scene is a pure data model; producing pixels from it is the job of
/// [`crate::render_still`] and [`crate::render_animation`].
pub struct HeartScene {
    /// The curve to draw.
    pub curve: HeartCurve,
    /// Geometry style.
    pub style: RenderStyle,
    /// Caption overlay text; an empty string draws no caption.
    pub caption: String,
    /// Output canvas dimensions.
    pub canvas: Canvas,
}

impl HeartScene {
    /// Build a scene on the [`DEFAULT_CANVAS`].
    pub fn new(curve: HeartCurve, style: RenderStyle, caption: impl Into<String>) -> Self {
        Self {
            curve,
            style,
            caption: caption.into(),
            canvas: DEFAULT_CANVAS,
        }
    }

    /// Replace the output canvas.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Validate scene invariants.
    pub fn validate(&self) -> HeartResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(HeartError::validation("canvas width/height must be > 0"));
        }
        if self.curve.is_empty() {
            return Err(HeartError::validation("scene curve must have >= 1 point"));
        }
        Ok(())
    }
}
