use anyhow::Result;
use tracing::{error, info, warn};

use crate::config::DocgridConfig;
use crate::fetch;
use crate::grid;
use crate::html::TableExtractor;
use crate::table::{self, NormalizeOptions};

/// Fetch, normalize, and render one document end to end.
///
/// Fetch and extraction failures degrade to a "no data" notice on stdout:
/// transient problems with the remote document never produce a partial or
/// garbled grid. Only an unrenderable record set is a hard error.
pub async fn decode_command(url: &str, config: &DocgridConfig, quiet: bool) -> Result<()> {
    info!("fetching document: {}", url);

    let markup = match fetch::fetch_document(url).await {
        Ok(markup) => markup,
        Err(e) => {
            error!("{}", e);
            println!("No data to display.");
            return Ok(());
        }
    };

    let extractor = TableExtractor::new()?;
    let Some(table) = extractor.extract_table(&markup) else {
        warn!("no table found in document");
        println!("No data to display.");
        return Ok(());
    };
    info!(
        "extracted table: {} columns, {} rows",
        table.labels.len(),
        table.rows.len()
    );

    let options = NormalizeOptions {
        prefer_formatted: config.prefer_formatted,
        prefer_formatted_dates: config.prefer_formatted_dates,
    };
    let records = table::to_records(&table, &options);
    info!("normalized {} records", records.len());

    let lines = grid::render(&records, &config.fields)?;
    if !quiet {
        println!("The decoded message is...");
    }
    for line in &lines {
        println!("{}", line);
    }

    Ok(())
}
