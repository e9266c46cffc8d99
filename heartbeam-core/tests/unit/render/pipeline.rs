use super::*;

use crate::curve::heart::HeartCurve;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Canvas;
use crate::scene::model::RenderStyle;

fn small_scene(points: usize) -> HeartScene {
    HeartScene::new(
        HeartCurve::generate(points).unwrap(),
        RenderStyle::Line,
        "",
    )
    .with_canvas(Canvas {
        width: 32,
        height: 32,
    })
}

#[test]
fn still_render_matches_canvas() {
    let frame = render_still(&small_scene(24)).unwrap();
    assert_eq!(frame.width, 32);
    assert_eq!(frame.height, 32);
    assert_eq!(frame.data.len(), 32 * 32 * 4);
}

#[test]
fn animation_pushes_points_times_cycles_frames() {
    let mut sink = InMemorySink::new();
    let pushed = render_animation(&small_scene(12), 2, &mut sink).unwrap();
    assert_eq!(pushed, 24);
    assert_eq!(sink.frames().len(), 24);

    let cfg = sink.config().expect("sink configured");
    assert_eq!((cfg.width, cfg.height), (32, 32));
    assert_eq!(cfg.fps, ANIMATION_FPS);

    for (i, (idx, frame)) in sink.frames().iter().enumerate() {
        assert_eq!(idx.0, i as u64);
        assert_eq!(frame.width, 32);
    }
}

#[test]
fn animation_second_cycle_repeats_the_first() {
    let mut sink = InMemorySink::new();
    render_animation(&small_scene(12), 2, &mut sink).unwrap();
    let frames = sink.frames();
    // Frame N shows the marker back at point 0.
    assert_eq!(frames[0].1.data, frames[12].1.data);
    assert_ne!(frames[0].1.data, frames[6].1.data);
}

#[test]
fn zero_cycles_is_rejected() {
    let mut sink = InMemorySink::new();
    assert!(matches!(
        render_animation(&small_scene(4), 0, &mut sink),
        Err(HeartError::Validation(_))
    ));
}
