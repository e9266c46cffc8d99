use super::*;

use std::path::PathBuf;

fn scratch_path(case: &str) -> PathBuf {
    std::env::temp_dir().join(format!("heartbeam_table_{}_{case}.txt", std::process::id()))
}

fn write_text(case: &str, text: &str) -> PathBuf {
    let path = scratch_path(case);
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn round_trip_appends_closing_point() {
    let path = scratch_path("round_trip");
    let curve = HeartCurve::generate(64).unwrap();
    write_curve(&path, &curve).unwrap();

    let loaded = read_curve(&path).unwrap();
    assert_eq!(loaded.len(), 65);

    // First 64 rows match the source to 6-decimal precision.
    for (orig, back) in curve.points().iter().zip(loaded.points()) {
        assert!((orig.x - back.x).abs() < 1e-6);
        assert!((orig.y - back.y).abs() < 1e-6);
    }

    // The closing row re-parses to exactly the same value as the first.
    assert_eq!(loaded.points()[64], loaded.points()[0]);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn reading_twice_yields_identical_curves() {
    let path = scratch_path("read_twice");
    write_curve(&path, &HeartCurve::generate(16).unwrap()).unwrap();

    let a = read_curve(&path).unwrap();
    let b = read_curve(&path).unwrap();
    assert_eq!(a, b);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn table_layout_is_header_then_six_decimal_rows() {
    let path = scratch_path("layout");
    write_curve(&path, &HeartCurve::generate(4).unwrap()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], TABLE_HEADER);
    assert_eq!(lines.len(), 1 + 4 + 1); // header + samples + closing row
    assert_eq!(lines[5], lines[1]);

    for line in &lines[1..] {
        let cols: Vec<&str> = line.split(',').collect();
        assert_eq!(cols.len(), 2);
        for col in cols {
            let (_, frac) = col.split_once('.').expect("fixed-point column");
            assert_eq!(frac.len(), 6, "six decimal places in '{col}'");
        }
    }

    let _ = std::fs::remove_file(&path);
}

#[test]
fn one_point_curve_saves_two_identical_rows() {
    let path = scratch_path("one_point");
    write_curve(&path, &HeartCurve::generate(1).unwrap()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], lines[2]);

    let loaded = read_curve(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.points()[0], loaded.points()[1]);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn single_data_row_loads_as_one_point_curve() {
    let path = write_text("single_row", "x,y\n1.000000,-2.500000\n");
    let loaded = read_curve(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.points()[0], Point::new(1.0, -2.5));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn three_columns_fail_with_format_error() {
    let path = write_text("three_cols", "x,y\n1.0,2.0,3.0\n");
    assert!(matches!(read_curve(&path), Err(HeartError::Format(_))));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn non_numeric_cell_fails_with_format_error() {
    let path = write_text("non_numeric", "x,y\n1.0,abc\n");
    assert!(matches!(read_curve(&path), Err(HeartError::Format(_))));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn header_only_file_fails_with_format_error() {
    let path = write_text("header_only", "x,y\n");
    assert!(matches!(read_curve(&path), Err(HeartError::Format(_))));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_fails_with_file_access_error() {
    let missing = PathBuf::from("/nonexistent/heartbeam/path.txt");
    assert!(matches!(
        read_curve(&missing),
        Err(HeartError::FileAccess(_))
    ));
}
