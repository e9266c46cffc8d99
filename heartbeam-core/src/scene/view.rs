use crate::foundation::core::{Affine, Canvas, Point, Rect, Vec2};
use crate::foundation::error::{HeartError, HeartResult};

#[derive(Clone, Copy, Debug)]
/// Uniform world-to-canvas mapping.
///
/// Fits a world box onto the pixel canvas preserving aspect ratio, centered,
/// with the y axis flipped (world y grows up, pixel y grows down).
pub struct ViewTransform {
    affine: Affine,
    scale: f64,
}

impl ViewTransform {
    /// Fit `world` onto `canvas`.
    pub fn fit(world: Rect, canvas: Canvas) -> HeartResult<Self> {
        let (w, h) = (world.width(), world.height());
        if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
            return Err(HeartError::validation(
                "view world box must have finite positive extent",
            ));
        }
        if canvas.width == 0 || canvas.height == 0 {
            return Err(HeartError::validation("canvas width/height must be > 0"));
        }

        let scale = (f64::from(canvas.width) / w).min(f64::from(canvas.height) / h);
        let canvas_center = Vec2::new(
            f64::from(canvas.width) / 2.0,
            f64::from(canvas.height) / 2.0,
        );

        // T(canvas center) * S(scale, -scale) * T(-world center)
        let affine = Affine::translate(canvas_center)
            * Affine::scale_non_uniform(scale, -scale)
            * Affine::translate(-world.center().to_vec2());

        Ok(Self { affine, scale })
    }

    /// Map a world point to canvas pixel coordinates.
    pub fn map_point(&self, p: Point) -> Point {
        self.affine * p
    }

    /// Convert a world-space length to canvas pixels.
    pub fn scale_len(&self, len: f64) -> f64 {
        len * self.scale
    }
}
