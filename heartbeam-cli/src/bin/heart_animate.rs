use std::path::PathBuf;

use clap::Parser;

/// Animate a heart with a traveling marker and save its edge coordinates to
/// a text file.
#[derive(Parser, Debug)]
#[command(name = "heart-animate", version)]
struct Cli {
    /// Number of points along the heart boundary.
    #[arg(long, default_value_t = 1000)]
    points: usize,

    /// Output text file for the curve coordinates.
    #[arg(long, default_value = "heart_edge_coordinates.txt")]
    output: PathBuf,

    /// Output MP4 path for the marker animation (requires `ffmpeg` on PATH).
    #[arg(long, default_value = "heart_animation.mp4")]
    movie: PathBuf,

    /// Write the animation as a PNG sequence into this directory instead of
    /// an MP4.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Number of full marker traversals to render.
    #[arg(long, default_value_t = 1)]
    cycles: u32,
}

fn main() -> anyhow::Result<()> {
    println!("hellpworks");
    let cli = Cli::parse();

    let curve = heartbeam::HeartCurve::generate(cli.points)?;
    heartbeam::write_curve(&cli.output, &curve)?;
    eprintln!("wrote {}", cli.output.display());

    let scene = heartbeam::HeartScene::new(
        curve,
        heartbeam::RenderStyle::Line,
        heartbeam::DEFAULT_CAPTION,
    );

    match cli.frames_dir {
        Some(dir) => {
            let mut sink = heartbeam::PngSequenceSink::new(&dir, heartbeam::BACKGROUND_RGBA);
            let frames = heartbeam::render_animation(&scene, cli.cycles, &mut sink)?;
            eprintln!("wrote {frames} frames to {}", dir.display());
        }
        None => {
            let mut sink = heartbeam::FfmpegSink::new(heartbeam::FfmpegSinkOpts::new(&cli.movie));
            heartbeam::render_animation(&scene, cli.cycles, &mut sink)?;
            eprintln!("wrote {}", cli.movie.display());
        }
    }

    Ok(())
}
