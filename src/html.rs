use scraper::{ElementRef, Html, Selector};

use crate::cell::classify;
use crate::error::{DocgridError, DocgridResult};
use crate::table::{Row, Table};

/// First-table extractor over fetched markup.
///
/// Only the first `<table>` in a document is considered. The first row
/// supplies the column labels; every remaining row becomes a data row with
/// each cell run through the classifier.
pub struct TableExtractor {
    tables: Selector,
    rows: Selector,
    cells: Selector,
}

impl TableExtractor {
    pub fn new() -> DocgridResult<Self> {
        Ok(Self {
            tables: Self::selector("table")?,
            rows: Self::selector("tr")?,
            cells: Self::selector("td, th")?,
        })
    }

    fn selector(pattern: &str) -> DocgridResult<Selector> {
        Selector::parse(pattern)
            .map_err(|e| DocgridError::selector(format!("{}: {:?}", pattern, e)))
    }

    /// Extract the first table in the markup. `None` means the document has
    /// no table-like structure, which callers treat as "no data" rather
    /// than an error.
    pub fn extract_table(&self, markup: &str) -> Option<Table> {
        let document = Html::parse_document(markup);
        let table = document.select(&self.tables).next()?;

        let mut rows = table.select(&self.rows);
        let labels = rows
            .next()
            .map(|tr| {
                tr.select(&self.cells)
                    .map(|cell| cell_text(cell))
                    .collect()
            })
            .unwrap_or_default();

        let data_rows: Vec<Row> = rows
            .map(|tr| {
                tr.select(&self.cells)
                    .map(|cell| classify(&cell_text(cell)))
                    .collect()
            })
            .collect();

        Some(Table {
            labels,
            rows: data_rows,
        })
    }
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;

    fn extractor() -> TableExtractor {
        TableExtractor::new().unwrap()
    }

    #[test]
    fn test_first_row_becomes_labels() {
        let markup = "<table><tbody>\
            <tr><td>x-coordinate</td><td>Character</td></tr>\
            <tr><td>0</td><td>A</td></tr>\
            </tbody></table>";
        let table = extractor().extract_table(markup).unwrap();
        assert_eq!(table.labels, vec!["x-coordinate", "Character"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0].value, CellValue::Number(0.0));
        assert_eq!(table.rows[0][1].value, CellValue::Text("A".to_string()));
    }

    #[test]
    fn test_th_cells_and_whitespace_are_handled() {
        let markup = "<table><tr><th> x </th><th> y </th></tr>\
            <tr><td> 1 </td><td> 2 </td></tr></table>";
        let table = extractor().extract_table(markup).unwrap();
        assert_eq!(table.labels, vec!["x", "y"]);
        assert_eq!(table.rows[0][0].formatted.as_deref(), Some("1"));
    }

    #[test]
    fn test_only_first_table_is_considered() {
        let markup = "<table><tr><td>a</td></tr><tr><td>1</td></tr></table>\
            <table><tr><td>b</td></tr><tr><td>2</td></tr></table>";
        let table = extractor().extract_table(markup).unwrap();
        assert_eq!(table.labels, vec!["a"]);
    }

    #[test]
    fn test_no_table_means_no_data() {
        assert!(extractor().extract_table("<p>nothing here</p>").is_none());
    }

    #[test]
    fn test_empty_table_yields_no_rows() {
        let table = extractor().extract_table("<table></table>").unwrap();
        assert!(table.labels.is_empty());
        assert!(table.rows.is_empty());
    }
}
