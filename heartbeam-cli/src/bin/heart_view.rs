use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Visualize saved heart edge coordinates from a text file.
#[derive(Parser, Debug)]
#[command(name = "heart-view", version)]
struct Cli {
    /// Path to the coordinates text file.
    #[arg(long, default_value = "heart_edge_coordinates.txt")]
    input: PathBuf,

    /// How to display the heart.
    #[arg(long, default_value = "line", value_parser = ["line", "points", "both"])]
    style: String,

    /// Message to display on the figure.
    #[arg(long, default_value = heartbeam::DEFAULT_CAPTION)]
    message: String,

    /// Output PNG path.
    #[arg(long, default_value = "heart_view.png")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let curve = heartbeam::read_curve(&cli.input)?;
    let style = heartbeam::RenderStyle::parse(&cli.style)?;
    let scene = heartbeam::HeartScene::new(curve, style, cli.message);

    let frame = heartbeam::render_still(&scene)?;

    if let Some(parent) = cli.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &cli.out,
        &frame.to_opaque_rgba8(heartbeam::BACKGROUND_RGBA)?,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
