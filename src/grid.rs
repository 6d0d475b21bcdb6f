use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::cell::format_number;
use crate::config::FieldNames;
use crate::error::{DocgridError, DocgridResult};
use crate::table::Record;

/// Render coordinate-tagged records as a dense character grid.
///
/// Returns one string per grid line, top row (highest y) first, so Cartesian
/// coordinates with y increasing upward read as upright text. Within a line,
/// x runs 0..=maxX left to right; cells with no record are blank.
///
/// Records missing a usable coordinate are skipped with a warning. When no
/// record is renderable there is no maximum to reduce over, and the call
/// fails with a named grid error rather than printing anything.
pub fn render(records: &[Record], fields: &FieldNames) -> DocgridResult<Vec<String>> {
    let mut cells: HashMap<(u32, u32), char> = HashMap::new();
    let mut max_x: Option<u32> = None;
    let mut max_y: Option<u32> = None;

    for (index, record) in records.iter().enumerate() {
        let (Some(x), Some(y)) = (
            coordinate(record, &fields.x),
            coordinate(record, &fields.y),
        ) else {
            warn!("record {} has no usable coordinates; skipped", index);
            continue;
        };

        // A record with coordinates but no character still stretches the
        // bounding box: it marks a deliberately blank region.
        max_x = Some(max_x.map_or(x, |m| m.max(x)));
        max_y = Some(max_y.map_or(y, |m| m.max(y)));

        if let Some(ch) = character(record, &fields.character) {
            // First record at a coordinate wins.
            cells.entry((x, y)).or_insert(ch);
        }
    }

    let (Some(max_x), Some(max_y)) = (max_x, max_y) else {
        return Err(DocgridError::grid("no renderable records"));
    };

    let mut lines = Vec::with_capacity(max_y as usize + 1);
    for y in (0..=max_y).rev() {
        let mut line = String::with_capacity(max_x as usize + 1);
        for x in 0..=max_x {
            line.push(cells.get(&(x, y)).copied().unwrap_or(' '));
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Non-negative integral coordinate from a record field. Numeric strings are
/// accepted so formatted-value records still render.
fn coordinate(record: &Record, field: &str) -> Option<u32> {
    let n = match record.get(field)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
        return None;
    }
    Some(n as u32)
}

/// Display character from a record field. Empty strings occupy no cell;
/// longer values contribute their first character so every line stays
/// exactly maxX + 1 cells wide.
fn character(record: &Record, field: &str) -> Option<char> {
    match record.get(field)? {
        Value::String(s) => s.chars().next(),
        Value::Number(n) => format_number(n.as_f64()?).chars().next(),
        _ => None,
    }
}
