use crate::foundation::error::{HeartError, HeartResult};

pub use kurbo::{Affine, BezPath, Circle, Point, Rect, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Zero-based index of a frame on the animation timeline.
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Frame rate as a rational number.
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator; must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> HeartResult<Self> {
        if den == 0 {
            return Err(HeartError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(HeartError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frame rate as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output canvas dimensions in pixels.
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build validated canvas dimensions.
    pub fn new(width: u32, height: u32) -> HeartResult<Self> {
        if width == 0 || height == 0 {
            return Err(HeartError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }
}
