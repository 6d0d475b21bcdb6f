use serde_json::{Map, Value};
use tracing::warn;

use crate::cell::{format_number, Cell, CellValue};

/// One table row: cells in source column order.
pub type Row = Vec<Cell>;

/// The row/column structure extracted from one document.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Column labels in source order; may be empty when the document
    /// carries no usable header row.
    pub labels: Vec<String>,
    pub rows: Vec<Row>,
}

/// A flattened key→value mapping representing one logical data row.
pub type Record = Map<String, Value>;

/// Explicit normalization configuration, passed per call rather than held
/// as mutable state on a long-lived parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Prefer the formatted cell text over the parsed numeric value.
    pub prefer_formatted: bool,
    /// Prefer the formatted cell text only for date-like cells.
    pub prefer_formatted_dates: bool,
}

/// Normalize a table into flat records.
///
/// Header resolution: when any column label is non-empty the labels are the
/// header. Otherwise the first row's cell values become the header and that
/// row is excluded from the data. Malformed or empty tables yield an empty
/// record list rather than an error.
pub fn to_records(table: &Table, options: &NormalizeOptions) -> Vec<Record> {
    let has_labels = table.labels.iter().any(|label| !label.is_empty());
    if has_labels {
        apply_header(&table.labels, &table.rows, options)
    } else {
        match table.rows.split_first() {
            Some((first, rest)) => {
                let header: Vec<String> = first.iter().map(header_name).collect();
                apply_header(&header, rest, options)
            }
            None => Vec::new(),
        }
    }
}

fn apply_header(header: &[String], rows: &[Row], options: &NormalizeOptions) -> Vec<Record> {
    rows.iter()
        .map(|row| build_record(header, row, options))
        .collect()
}

fn build_record(header: &[String], row: &Row, options: &NormalizeOptions) -> Record {
    if row.len() > header.len() {
        warn!(
            "row has {} cells but header has {} columns; extra cells dropped",
            row.len(),
            header.len()
        );
    }

    let mut record = Record::new();
    for (name, cell) in header.iter().zip(row.iter()) {
        // Blank cells contribute no key: records are sparse by design, and
        // rows shorter than the header simply stop contributing early.
        if let CellValue::Text(text) = &cell.value {
            if text.is_empty() {
                continue;
            }
        }
        record.insert(name.clone(), resolve_value(cell, options));
    }
    record
}

fn resolve_value(cell: &Cell, options: &NormalizeOptions) -> Value {
    if options.prefer_formatted || (options.prefer_formatted_dates && cell.is_date_like()) {
        if let Some(formatted) = &cell.formatted {
            return Value::String(formatted.clone());
        }
    }
    match &cell.value {
        CellValue::Number(n) => Value::from(*n),
        CellValue::Text(s) => Value::String(s.clone()),
    }
}

/// Column name for a headerless-path header cell.
fn header_name(cell: &Cell) -> String {
    match &cell.value {
        CellValue::Number(n) => format_number(*n),
        CellValue::Text(s) => s.clone(),
    }
}
