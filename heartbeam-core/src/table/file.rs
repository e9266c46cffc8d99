use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context as _;

use crate::curve::heart::HeartCurve;
use crate::foundation::core::Point;
use crate::foundation::error::{HeartError, HeartResult};

/// Literal header line of a serialized coordinate table.
pub const TABLE_HEADER: &str = "x,y";

/// Write `curve` to `path` as a two-column coordinate table.
///
/// Format: the [`TABLE_HEADER`] line, one `%.6f,%.6f` row per sample, and a
/// final row duplicating the first sample so the on-disk polygon is
/// explicitly closed. Creates or overwrites `path`.
///
/// Filesystem failures are propagated as wrapped IO errors, not as the
/// reader's [`HeartError::FileAccess`] kind.
#[tracing::instrument(skip(curve), fields(points = curve.len()))]
pub fn write_curve(path: &Path, curve: &HeartCurve) -> HeartResult<()> {
    let points = curve.points();

    let mut out = String::with_capacity((points.len() + 2) * 24);
    out.push_str(TABLE_HEADER);
    out.push('\n');
    for p in points {
        push_row(&mut out, *p);
    }
    // Closing point: the first sample again.
    push_row(&mut out, points[0]);

    std::fs::write(path, out)
        .with_context(|| format!("write coordinate table to '{}'", path.display()))
        .map_err(HeartError::from)
}

/// Read a coordinate table previously written by [`write_curve`].
///
/// The first line is skipped as the header. Every remaining non-empty line
/// must hold exactly two numeric columns; a single data row yields a valid
/// one-point curve.
///
/// Errors:
/// - [`HeartError::FileAccess`] when `path` cannot be opened or read.
/// - [`HeartError::Format`] when a row does not have exactly two columns,
///   when a cell is not numeric, or when no data rows remain.
#[tracing::instrument]
pub fn read_curve(path: &Path) -> HeartResult<HeartCurve> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        HeartError::file_access(format!("could not read file '{}': {e}", path.display()))
    })?;

    let mut points = Vec::new();
    for (line_idx, line) in text.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        points.push(parse_row(line, line_idx + 1)?);
    }

    if points.is_empty() {
        return Err(HeartError::format(
            "invalid data format: expected two columns x,y, found no data rows",
        ));
    }

    HeartCurve::from_points(points)
}

fn push_row(out: &mut String, p: Point) {
    // Writing into a String cannot fail; the Result is a fmt::Write artifact.
    let _ = writeln!(out, "{:.6},{:.6}", p.x, p.y);
}

fn parse_row(line: &str, line_no: usize) -> HeartResult<Point> {
    let cols: Vec<&str> = line.split(',').collect();
    if cols.len() != 2 {
        return Err(HeartError::format(format!(
            "invalid data format: expected two columns x,y, got {} on line {line_no}",
            cols.len()
        )));
    }

    let x = parse_cell(cols[0], line_no)?;
    let y = parse_cell(cols[1], line_no)?;
    Ok(Point::new(x, y))
}

fn parse_cell(cell: &str, line_no: usize) -> HeartResult<f64> {
    cell.trim().parse::<f64>().map_err(|_| {
        HeartError::format(format!(
            "invalid data format: non-numeric value '{}' on line {line_no}",
            cell.trim()
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/table/file.rs"]
mod tests;
