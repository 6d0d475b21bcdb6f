use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One typed table entry.
///
/// `formatted` preserves the original display text (leading zeros, units,
/// separators) and is present only when `value` is numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub formatted: Option<String>,
}

/// Resolved scalar held by a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn is_numeric(&self) -> bool {
        matches!(self.value, CellValue::Number(_))
    }

    /// A numeric cell whose display text parses as a calendar date.
    ///
    /// Dates like `2024-01-15` classify as numeric (the leading `2024`
    /// parses), so the formatted text is the only place the full date
    /// survives.
    pub fn is_date_like(&self) -> bool {
        let Some(formatted) = &self.formatted else {
            return false;
        };
        NaiveDate::parse_from_str(formatted, "%Y-%m-%d").is_ok()
            || NaiveDate::parse_from_str(formatted, "%m/%d/%Y").is_ok()
    }
}

/// Classify raw cell text into a typed cell. Never fails: any input that
/// does not start with a valid number becomes a text cell.
pub fn classify(text: &str) -> Cell {
    let trimmed = text.trim();
    match parse_leading_float(trimmed) {
        Some(number) => Cell {
            value: CellValue::Number(number),
            formatted: Some(trimmed.to_string()),
        },
        None => Cell {
            value: CellValue::Text(trimmed.to_string()),
            formatted: None,
        },
    }
}

/// Parse the longest valid floating-point prefix of `s`.
///
/// Leading-numeric-prefix semantics: `"1.5 kg"` parses as 1.5, `"007"` as 7,
/// `"abc"` as nothing. A whole-string check would reject suffixed values the
/// source documents routinely carry.
fn parse_leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.get(pos), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    let mut digits = 0;
    while bytes.get(pos).is_some_and(|b| b.is_ascii_digit()) {
        pos += 1;
        digits += 1;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while bytes.get(pos).is_some_and(|b| b.is_ascii_digit()) {
            pos += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // The exponent only extends the prefix when digits follow the marker,
    // so "2e" parses as 2 and "2e3" as 2000.
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_end = pos + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(|b| b.is_ascii_digit()) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            pos = exp_end;
        }
    }

    s[..pos].parse::<f64>().ok()
}

/// Display form for a numeric value: integral values print without a
/// trailing `.0` so they round-trip as map keys and grid characters.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_cell_keeps_formatted_text() {
        let cell = classify("  007  ");
        assert_eq!(cell.value, CellValue::Number(7.0));
        assert_eq!(cell.formatted.as_deref(), Some("007"));
    }

    #[test]
    fn test_leading_prefix_parsing() {
        assert_eq!(classify("1.5 kg").value, CellValue::Number(1.5));
        assert_eq!(classify("-3.25e2x").value, CellValue::Number(-325.0));
        assert_eq!(classify("2e").value, CellValue::Number(2.0));
        assert_eq!(classify(".5!").value, CellValue::Number(0.5));
        assert_eq!(classify("12.").value, CellValue::Number(12.0));
    }

    #[test]
    fn test_text_cell_has_no_formatted_form() {
        let cell = classify("  hello  ");
        assert_eq!(cell.value, CellValue::Text("hello".to_string()));
        assert!(cell.formatted.is_none());
    }

    #[test]
    fn test_non_numeric_prefixes_stay_text() {
        for input in ["", "abc", "+", "-", ".", "e5", "x12", "--3"] {
            assert!(!classify(input).is_numeric(), "{:?} should be text", input);
        }
    }

    #[test]
    fn test_date_like_detection() {
        assert!(classify("2024-01-15").is_date_like());
        assert!(classify("01/15/2024").is_date_like());
        assert!(!classify("2024").is_date_like());
        assert!(!classify("hello").is_date_like());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(1.5), "1.5");
    }
}
