//! Heartbeam generates the classic parametric heart curve, renders it, and
//! persists its coordinates as a plain-text table other tools can re-read.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: [`HeartCurve::generate`] samples the closed-form curve at
//!    N evenly spaced parameter values.
//! 2. **Persist**: [`write_curve`] / [`read_curve`] move the samples through
//!    the two-column `x,y` table format (the sole wire contract).
//! 3. **Render**: [`render_still`] produces one static frame
//!    (`FrameRGBA`); [`render_animation`] steps a marker along the curve and
//!    streams frames to a [`FrameSink`] (PNG sequence, or MP4 via the system
//!    `ffmpeg` binary).
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: curve generation and frame rendering are
//!   pure and stable for a given input.
//! - **No IO in renderers**: file reads and font resolution are front-loaded
//!   in [`PreparedScene`]; sinks own all output IO.
//! - **Premultiplied RGBA8** end-to-end: the renderer outputs premultiplied
//!   pixels and sinks flatten them over an opaque background.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod curve;
mod encode;
mod foundation;
mod render;
mod scene;
mod table;

pub use curve::heart::{BOUNDS_MARGIN, HeartCurve};
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use foundation::core::{Affine, BezPath, Canvas, Circle, Fps, FrameIndex, Point, Rect, Vec2};
pub use foundation::error::{HeartError, HeartResult};
pub use render::cpu::{CpuRenderer, FrameRGBA, PreparedScene, RenderSettings};
pub use render::pipeline::{render_animation, render_still};
pub use scene::model::{
    ANIMATION_FPS, BACKGROUND_RGBA, DEFAULT_CANVAS, DEFAULT_CAPTION, HeartScene, RenderStyle,
};
pub use scene::view::ViewTransform;
pub use table::file::{TABLE_HEADER, read_curve, write_curve};
