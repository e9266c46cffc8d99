use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{HeartError, HeartResult};
use crate::render::cpu::{CpuRenderer, FrameRGBA, PreparedScene, RenderSettings};
use crate::scene::model::{ANIMATION_FPS, BACKGROUND_RGBA, HeartScene};

/// Render the static view of `scene`: curve geometry plus caption, no
/// marker. This is the viewer's single-frame path.
#[tracing::instrument(skip(scene), fields(points = scene.curve.len()))]
pub fn render_still(scene: &HeartScene) -> HeartResult<FrameRGBA> {
    let prepared = PreparedScene::prepare(scene.clone())?;
    let mut renderer = CpuRenderer::new(RenderSettings {
        clear_rgba: Some(BACKGROUND_RGBA),
    });
    renderer.render_frame(&prepared, None)
}

/// Render the marker animation of `scene` into `sink`.
///
/// One frame per curve point at [`ANIMATION_FPS`], the marker wrapping from
/// the last point back to the first; `cycles` full traversals are rendered.
/// Frames are pushed in strictly increasing index order. Returns the number
/// of frames pushed.
#[tracing::instrument(skip(scene, sink), fields(points = scene.curve.len(), cycles))]
pub fn render_animation(
    scene: &HeartScene,
    cycles: u32,
    sink: &mut dyn FrameSink,
) -> HeartResult<u64> {
    if cycles == 0 {
        return Err(HeartError::validation("animation cycles must be >= 1"));
    }

    let prepared = PreparedScene::prepare(scene.clone())?;
    let mut renderer = CpuRenderer::new(RenderSettings {
        clear_rgba: Some(BACKGROUND_RGBA),
    });

    let frames_total = prepared.scene().curve.len() as u64 * u64::from(cycles);
    sink.begin(SinkConfig {
        width: scene.canvas.width,
        height: scene.canvas.height,
        fps: ANIMATION_FPS,
    })?;

    for f in 0..frames_total {
        let idx = FrameIndex(f);
        let frame = renderer.render_frame(&prepared, Some(idx))?;
        sink.push_frame(idx, &frame)?;
    }

    sink.end()?;
    Ok(frames_total)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
