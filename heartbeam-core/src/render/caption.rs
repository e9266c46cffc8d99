use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{HeartError, HeartResult};

#[derive(Clone, Debug)]
/// Caption text rasterized to a canvas-sized premultiplied RGBA8 layer.
pub struct CaptionLayer {
    /// Layer width in pixels (equals the canvas width).
    pub width: u32,
    /// Layer height in pixels (equals the canvas height).
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Vec<u8>,
}

/// Rasterize `text` into a transparent canvas-sized layer.
///
/// The text is centered horizontally on `anchor_px` with its baseline
/// vertically centered there, bold, dark red, resolved against system fonts
/// with a sans-serif fallback. Returns `None` for empty text.
pub fn rasterize_caption(
    text: &str,
    anchor_px: Point,
    size_px: f64,
    canvas: Canvas,
) -> HeartResult<Option<CaptionLayer>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    if !size_px.is_finite() || size_px <= 0.0 {
        return Err(HeartError::validation(
            "caption size_px must be finite and > 0",
        ));
    }

    let svg = caption_svg(text, anchor_px, size_px, canvas);
    let opts = usvg::Options {
        fontdb: system_fontdb(),
        font_resolver: make_font_resolver(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts)
        .map_err(|e| HeartError::render(format!("parse caption svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| HeartError::render("failed to allocate caption pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    Ok(Some(CaptionLayer {
        width: canvas.width,
        height: canvas.height,
        rgba8_premul: pixmap.data().to_vec(),
    }))
}

fn caption_svg(text: &str, anchor_px: Point, size_px: f64, canvas: Canvas) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" dominant-baseline="central" "#,
            r#"font-family="sans-serif" font-weight="bold" font-size="{size:.2}" fill="{fill}">{text}</text>"#,
            "</svg>"
        ),
        w = canvas.width,
        h = canvas.height,
        x = anchor_px.x,
        y = anchor_px.y,
        size = size_px,
        fill = crate::scene::model::CAPTION_FILL,
        text = escape_xml(text),
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn system_fontdb() -> std::sync::Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    std::sync::Arc::new(db)
}

/// Font resolver that degrades from the requested family through the generic
/// families down to any installed face, so the caption survives hosts with a
/// sparse font set.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);
            families.push(usvg::fontdb::Family::Serif);

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style: usvg::fontdb::Style::Normal,
            };

            if let Some(id) = fontdb.query(&query) {
                return Some(id);
            }
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}
