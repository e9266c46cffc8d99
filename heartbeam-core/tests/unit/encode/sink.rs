use super::*;

use crate::foundation::core::Fps;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps { num: 50, den: 1 },
    }
}

fn white_frame(width: u32, height: u32) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: vec![255u8; (width * height * 4) as usize],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_rejects_out_of_order_frames() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(8, 8)).unwrap();
    sink.push_frame(FrameIndex(0), &white_frame(8, 8)).unwrap();
    sink.push_frame(FrameIndex(1), &white_frame(8, 8)).unwrap();
    assert!(sink.push_frame(FrameIndex(1), &white_frame(8, 8)).is_err());
    assert!(sink.push_frame(FrameIndex(0), &white_frame(8, 8)).is_err());
}

#[test]
fn in_memory_sink_captures_config_and_frames() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(8, 4)).unwrap();
    sink.push_frame(FrameIndex(0), &white_frame(8, 4)).unwrap();
    sink.end().unwrap();

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (8, 4));
    assert_eq!(sink.frames().len(), 1);
}

#[test]
fn png_sink_paths_are_zero_padded() {
    let sink = PngSequenceSink::new("frames", [255, 255, 255, 255]);
    assert!(
        sink.frame_path(FrameIndex(7))
            .to_string_lossy()
            .ends_with("frame_00007.png")
    );
    assert!(
        sink.frame_path(FrameIndex(12345))
            .to_string_lossy()
            .ends_with("frame_12345.png")
    );
}

#[test]
fn png_sink_writes_one_file_per_frame() {
    let dir = std::env::temp_dir().join(format!("heartbeam_pngseq_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = PngSequenceSink::new(&dir, [255, 255, 255, 255]);
    sink.begin(cfg(8, 8)).unwrap();
    for f in 0..3u64 {
        sink.push_frame(FrameIndex(f), &white_frame(8, 8)).unwrap();
    }
    sink.end().unwrap();

    for f in 0..3u64 {
        assert!(dir.join(format!("frame_{f:05}.png")).is_file());
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn png_sink_rejects_size_mismatch() {
    let dir = std::env::temp_dir().join(format!("heartbeam_pngseq_bad_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = PngSequenceSink::new(&dir, [255, 255, 255, 255]);
    sink.begin(cfg(8, 8)).unwrap();
    assert!(sink.push_frame(FrameIndex(0), &white_frame(4, 4)).is_err());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn png_sink_requires_begin() {
    let mut sink = PngSequenceSink::new("frames", [255, 255, 255, 255]);
    assert!(sink.push_frame(FrameIndex(0), &white_frame(8, 8)).is_err());
}
