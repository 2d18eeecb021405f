// src/report.rs
use std::io::{self, Write};

use csv::WriterBuilder;
use rust_decimal::Decimal;

use crate::config::options::{ExportFormat, HeaderStyle};
use crate::data::PriceDelta;

pub const HEADERS_EN: [&str; 7] = [
    "Product",
    "Description",
    "Category",
    "Price Day 1",
    "Price Day 2",
    "Absolute Price Difference",
    "Percent Price Difference",
];

pub const HEADERS_DE: [&str; 7] = [
    "Produkt",
    "Beschreibung",
    "Kategorie",
    "Preis Tag 1 (in CHF)",
    "Preis Tag 2 (in CHF)",
    "Preisdifferenz (in CHF)",
    "Preisdifferenz (in Prozent)",
];

pub fn headers(style: HeaderStyle) -> &'static [&'static str; 7] {
    match style {
        HeaderStyle::English => &HEADERS_EN,
        HeaderStyle::German => &HEADERS_DE,
    }
}

/// Shortest form with at least one fractional digit: `10.0`, `12.5`, `3.03`.
/// Values arrive already rounded; nothing is rounded here.
fn num(value: Decimal) -> String {
    let v = value.normalize();
    if v.scale() == 0 { format!("{v}.0") } else { v.to_string() }
}

/// One output row, columns in header order.
pub fn delta_row(d: &PriceDelta) -> [String; 7] {
    [
        d.name.clone(),
        d.description.clone(),
        d.category.clone(),
        num(d.price_day_one),
        num(d.price_day_two),
        num(d.absolute_difference),
        num(d.percent_change),
    ]
}

/// Header row, then one row per delta in input order.
pub fn write_report<W: Write>(
    sink: W,
    deltas: &[PriceDelta],
    format: ExportFormat,
    style: HeaderStyle,
) -> Result<(), csv::Error> {
    let mut w = WriterBuilder::new()
        .delimiter(format.delim())
        .from_writer(sink);

    w.write_record(headers(style))?;
    for d in deltas {
        w.write_record(delta_row(d))?;
    }
    w.flush()?;
    Ok(())
}

/// Whole report as one string.
pub fn to_report_string(
    deltas: &[PriceDelta],
    format: ExportFormat,
    style: HeaderStyle,
) -> Result<String, csv::Error> {
    let mut buf: Vec<u8> = Vec::new();
    write_report(&mut buf, deltas, format, style)?;

    // Every cell came from a `String`, so the buffer is valid UTF-8.
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn delta(name: &str, one: &str, two: &str, abs: &str, pct: &str) -> PriceDelta {
        let d = |s: &str| Decimal::from_str(s).unwrap();
        PriceDelta {
            name: name.into(),
            description: "A thing, with a comma".into(),
            category: "Misc".into(),
            price_day_one: d(one),
            price_day_two: d(two),
            absolute_difference: d(abs),
            percent_change: d(pct),
        }
    }

    #[test]
    fn numbers_render_shortest_with_one_fractional_digit() {
        let n = |s: &str| num(Decimal::from_str(s).unwrap());
        assert_eq!(n("25.00"), "25.0");
        assert_eq!(n("12.50"), "12.5");
        assert_eq!(n("9.90"), "9.9");
        assert_eq!(n("3.03"), "3.03");
        assert_eq!(n("-4.17"), "-4.17");
        assert_eq!(n("120"), "120.0");
        assert_eq!(n("0.00"), "0.0");
        assert_eq!(n("-0.00"), "0.0");
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        let s = to_report_string(
            &[delta("Widget", "10.00", "12.50", "2.50", "25.00")],
            ExportFormat::Csv,
            HeaderStyle::English,
        )
        .unwrap();
        let mut lines = s.lines();
        assert_eq!(
            lines.next(),
            Some("Product,Description,Category,Price Day 1,Price Day 2,Absolute Price Difference,Percent Price Difference")
        );
        assert_eq!(lines.next(), Some("Widget,\"A thing, with a comma\",Misc,10.0,12.5,2.5,25.0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn tsv_with_german_headers() {
        let s = to_report_string(
            &[delta("Yoga-Matte", "35.00", "35.00", "0.00", "0.00")],
            ExportFormat::Tsv,
            HeaderStyle::German,
        )
        .unwrap();
        let mut lines = s.lines();
        assert!(lines.next().unwrap().starts_with("Produkt\tBeschreibung\tKategorie\t"));
        assert_eq!(lines.next(), Some("Yoga-Matte\tA thing, with a comma\tMisc\t35.0\t35.0\t0.0\t0.0"));
    }

    #[test]
    fn empty_input_still_has_header() {
        let s = to_report_string(&[], ExportFormat::Csv, HeaderStyle::English).unwrap();
        assert_eq!(s.lines().count(), 1);
    }
}
