use crate::foundation::core::{FrameIndex, Point, Rect};
use crate::foundation::error::{HeartError, HeartResult};

/// Margin, in curve units, added around the curve bounds on every side.
pub const BOUNDS_MARGIN: f64 = 3.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An immutable, ordered sampling of the parametric heart curve.
///
/// The curve is the classic "sin^3" heart:
///
/// ```text
/// x(t) = 16 sin^3(t)
/// y(t) = 13 cos(t) - 5 cos(2t) - 2 cos(3t) - cos(4t)
/// ```
///
/// Samples cover `t` in `[0, 2*pi)` at evenly spaced parameter values. The
/// in-memory curve is open: the closing duplicate point exists only in the
/// on-disk table form (see [`crate::write_curve`]).
pub struct HeartCurve {
    points: Vec<Point>,
}

impl HeartCurve {
    /// Sample the heart curve at `num_points` evenly spaced parameter values.
    ///
    /// Deterministic: the same `num_points` always yields the same points.
    /// `num_points == 0` is rejected; `num_points == 1` yields a degenerate
    /// one-point curve.
    #[tracing::instrument]
    pub fn generate(num_points: usize) -> HeartResult<Self> {
        if num_points == 0 {
            return Err(HeartError::validation("num_points must be >= 1"));
        }

        let n = num_points as f64;
        let points = (0..num_points)
            .map(|i| {
                let t = 2.0 * std::f64::consts::PI * (i as f64) / n;
                Point::new(heart_x(t), heart_y(t))
            })
            .collect();

        Ok(Self { points })
    }

    /// Wrap an existing point sequence, e.g. one read back from disk.
    pub fn from_points(points: Vec<Point>) -> HeartResult<Self> {
        if points.is_empty() {
            return Err(HeartError::validation("curve must have >= 1 point"));
        }
        Ok(Self { points })
    }

    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when the curve has no points. Construction forbids this; the
    /// method exists for the conventional `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrow the sampled points in parameter order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The point a traveling marker occupies at `frame`, wrapping from the
    /// last point back to the first.
    pub fn marker_point(&self, frame: FrameIndex) -> Point {
        let idx = (frame.0 % self.points.len() as u64) as usize;
        self.points[idx]
    }

    /// Tight axis-aligned bounds of the sampled points.
    pub fn bounds(&self) -> Rect {
        let first = self.points[0];
        self.points.iter().skip(1).fold(
            Rect::new(first.x, first.y, first.x, first.y),
            |r, p| Rect::new(r.x0.min(p.x), r.y0.min(p.y), r.x1.max(p.x), r.y1.max(p.y)),
        )
    }

    /// Bounds expanded by [`BOUNDS_MARGIN`] on every side. This is the world
    /// box the renderers fit to the canvas and place the caption in.
    pub fn margined_bounds(&self) -> Rect {
        self.bounds().inflate(BOUNDS_MARGIN, BOUNDS_MARGIN)
    }
}

fn heart_x(t: f64) -> f64 {
    16.0 * t.sin().powi(3)
}

fn heart_y(t: f64) -> f64 {
    13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos()
}

#[cfg(test)]
#[path = "../../tests/unit/curve/heart.rs"]
mod tests;
