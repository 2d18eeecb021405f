// tests/report_export.rs
//
// Report rendering and file output without any network.
//
use std::fs;
use std::str::FromStr;

use catalog_diff::compare::price_delta;
use catalog_diff::config::options::{ExportFormat, ExportOptions, HeaderStyle};
use catalog_diff::data::Product;
use catalog_diff::error::Error;
use catalog_diff::file::write_report_file;
use catalog_diff::report::{HEADERS_EN, write_report};
use rust_decimal::Decimal;

fn widget(price: &str) -> Product {
    Product {
        name: "Widget".into(),
        price: Decimal::from_str(price).unwrap(),
        description: "Small widget".into(),
        category: "Tools".into(),
    }
}

#[test]
fn widget_round_trip_row() {
    let delta = price_delta(&widget("10.00"), &widget("12.50")).unwrap();

    let mut sink = Vec::new();
    write_report(&mut sink, &[delta], ExportFormat::Csv, HeaderStyle::English).unwrap();
    let text = String::from_utf8(sink).unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(HEADERS_EN.join(",").as_str()));
    assert_eq!(lines.next(), Some("Widget,Small widget,Tools,10.0,12.5,2.5,25.0"));
    assert_eq!(lines.next(), None);
}

#[test]
fn out_path_extension_follows_format() {
    let mut export = ExportOptions::default();
    assert!(export.out_path().to_string_lossy().ends_with("price_report.csv"));

    export.set_path("reports/monday.csv");
    export.format = ExportFormat::Tsv;
    assert!(export.out_path().ends_with("monday.tsv"));
}

#[test]
fn overwrites_existing_report() {
    let tmp = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_path(tmp.path().join("nested/deeper/report.csv").to_str().unwrap());

    let path = export.out_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "stale\n".repeat(100)).unwrap();

    let delta = price_delta(&widget("10.00"), &widget("12.50")).unwrap();
    let written = write_report_file(&export, &[delta]).unwrap();
    assert_eq!(written, path);

    let text = fs::read_to_string(&written).unwrap();
    assert!(!text.contains("stale"));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn directory_in_place_of_file_is_an_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_path(tmp.path().join("taken.csv").to_str().unwrap());
    fs::create_dir(export.out_path()).unwrap();

    let err = write_report_file(&export, &[]).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "{err}");
}
