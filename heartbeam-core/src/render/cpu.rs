use std::sync::Arc;

use crate::foundation::core::{Canvas, FrameIndex, Point};
use crate::foundation::error::{HeartError, HeartResult};
use crate::foundation::math::flatten_premul_over_bg;
use crate::render::caption::{CaptionLayer, rasterize_caption};
use crate::scene::model::{self, HeartScene};
use crate::scene::view::ViewTransform;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha** end-to-end; the `premultiplied` flag
/// makes this explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Flatten this frame over an opaque background, returning straight
    /// RGBA8 bytes suitable for PNG output or raw video streams.
    pub fn to_opaque_rgba8(&self, bg_rgba: [u8; 4]) -> HeartResult<Vec<u8>> {
        let mut out = vec![0u8; self.data.len()];
        flatten_premul_over_bg(&mut out, &self.data, bg_rgba)?;
        Ok(out)
    }
}

/// Renderer settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// If set, the target is cleared to this straight RGBA8 color before
    /// drawing; otherwise it starts transparent.
    pub clear_rgba: Option<[u8; 4]>,
}

/// A scene with its render-time state front-loaded: the world-to-canvas fit
/// and the rasterized caption layer. IO and font resolution happen here so
/// the per-frame path stays deterministic and IO-free.
#[derive(Clone, Debug)]
pub struct PreparedScene {
    scene: HeartScene,
    view: ViewTransform,
    caption: Option<CaptionLayer>,
    marker_radius_px: f64,
}

impl PreparedScene {
    /// Validate `scene` and precompute everything the per-frame path needs.
    #[tracing::instrument(skip(scene), fields(points = scene.curve.len()))]
    pub fn prepare(scene: HeartScene) -> HeartResult<Self> {
        scene.validate()?;

        let world = scene.curve.margined_bounds();
        let view = ViewTransform::fit(world, scene.canvas)?;

        let anchor_world = Point::new(
            world.center().x,
            world.y0 + model::CAPTION_HEIGHT_FRACTION * world.height(),
        );
        let caption = rasterize_caption(
            &scene.caption,
            view.map_point(anchor_world),
            model::CAPTION_SIZE_FRACTION * f64::from(scene.canvas.height),
            scene.canvas,
        )?;

        let max_range = world.width().max(world.height());
        let marker_radius_px = view.scale_len(model::MARKER_RADIUS_FRACTION * max_range);

        Ok(Self {
            scene,
            view,
            caption,
            marker_radius_px,
        })
    }

    /// Borrow the underlying scene.
    pub fn scene(&self) -> &HeartScene {
        &self.scene
    }

    /// Output canvas dimensions.
    pub fn canvas(&self) -> Canvas {
        self.scene.canvas
    }
}

/// CPU raster renderer powered by `vello_cpu`.
pub struct CpuRenderer {
    settings: RenderSettings,
    caption_paint: Option<vello_cpu::Image>,
}

impl CpuRenderer {
    /// Create a renderer with `settings`.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            caption_paint: None,
        }
    }

    /// Render one frame of `prepared`.
    ///
    /// With `marker: Some(f)` a traveling marker is drawn at curve point
    /// `f mod N`; with `None` the frame is the static view.
    pub fn render_frame(
        &mut self,
        prepared: &PreparedScene,
        marker: Option<FrameIndex>,
    ) -> HeartResult<FrameRGBA> {
        let canvas = prepared.canvas();
        let width_u16: u16 = canvas
            .width
            .try_into()
            .map_err(|_| HeartError::render("canvas width exceeds u16"))?;
        let height_u16: u16 = canvas
            .height
            .try_into()
            .map_err(|_| HeartError::render("canvas height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            clear_pixmap(&mut pixmap, premul_rgba8(r, g, b, a));
        }

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let style = prepared.scene.style;
        if style.draws_line() {
            draw_outline(&mut ctx, prepared);
        }
        if style.draws_points() {
            draw_points(&mut ctx, prepared);
        }
        if let Some(frame) = marker {
            draw_marker(&mut ctx, prepared, frame);
        }
        if let Some(layer) = prepared.caption.as_ref() {
            let paint = self.caption_paint_for(layer)?;
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(paint);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(layer.width),
                f64::from(layer.height),
            ));
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn caption_paint_for(&mut self, layer: &CaptionLayer) -> HeartResult<vello_cpu::Image> {
        if let Some(paint) = self.caption_paint.as_ref() {
            return Ok(paint.clone());
        }

        let pixmap = premul_bytes_to_pixmap(&layer.rgba8_premul, layer.width, layer.height)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.caption_paint = Some(paint.clone());
        Ok(paint)
    }
}

fn draw_outline(ctx: &mut vello_cpu::RenderContext, prepared: &PreparedScene) {
    let mut path = vello_cpu::kurbo::BezPath::new();
    let mut points = prepared.scene.curve.points().iter();
    if let Some(first) = points.next() {
        let p = prepared.view.map_point(*first);
        path.move_to(vello_cpu::kurbo::Point::new(p.x, p.y));
    }
    for p in points {
        let p = prepared.view.map_point(*p);
        path.line_to(vello_cpu::kurbo::Point::new(p.x, p.y));
    }

    ctx.set_paint(color(model::OUTLINE_RGBA));
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(model::OUTLINE_STROKE_PX));
    ctx.stroke_path(&path);
}

fn draw_points(ctx: &mut vello_cpu::RenderContext, prepared: &PreparedScene) {
    ctx.set_paint(color(model::POINT_RGBA));
    for p in prepared.scene.curve.points() {
        let c = prepared.view.map_point(*p);
        ctx.fill_path(&circle_path(c, model::POINT_RADIUS_PX));
    }
}

fn draw_marker(ctx: &mut vello_cpu::RenderContext, prepared: &PreparedScene, frame: FrameIndex) {
    let c = prepared
        .view
        .map_point(prepared.scene.curve.marker_point(frame));
    let path = circle_path(c, prepared.marker_radius_px);

    ctx.set_paint(color(model::MARKER_FILL_RGBA));
    ctx.fill_path(&path);

    ctx.set_paint(color(model::MARKER_RIM_RGBA));
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(model::MARKER_RIM_PX));
    ctx.stroke_path(&path);
}

fn circle_path(center: Point, radius: f64) -> vello_cpu::kurbo::BezPath {
    use vello_cpu::kurbo::Shape as _;

    vello_cpu::kurbo::Circle::new(vello_cpu::kurbo::Point::new(center.x, center.y), radius)
        .to_path(0.1)
}

fn color(rgba: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn premul_rgba8(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    let af = (a as u16) + 1;
    let premul = |c: u8| -> u8 { (((c as u16) * af) >> 8) as u8 };
    [premul(r), premul(g), premul(b), a]
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> HeartResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| HeartError::render("layer width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| HeartError::render("layer height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(HeartError::render("caption layer byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
