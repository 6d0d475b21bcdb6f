use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use docgrid::cli::decode_command;
use docgrid::config::DocgridConfig;
use docgrid::logging::init_logging;

#[derive(Parser)]
#[command(name = "docgrid")]
#[command(about = "Decode a published HTML table of coordinate-tagged characters into a terminal grid")]
struct Cli {
    /// Document URL (prompted for on stdin when omitted)
    url: Option<String>,

    /// Prefer the formatted cell text over parsed numeric values
    #[arg(long)]
    prefer_formatted: bool,

    /// Prefer the formatted cell text for date-like cells only
    #[arg(long)]
    prefer_formatted_dates: bool,

    /// Record field holding the x coordinate
    #[arg(long)]
    x_field: Option<String>,

    /// Record field holding the y coordinate
    #[arg(long)]
    y_field: Option<String>,

    /// Record field holding the display character
    #[arg(long)]
    char_field: Option<String>,

    /// Suppress informational banner lines
    #[arg(short, long)]
    quiet: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut config = DocgridConfig::load_from_env();
    if cli.prefer_formatted {
        config.prefer_formatted = true;
    }
    if cli.prefer_formatted_dates {
        config.prefer_formatted_dates = true;
    }
    if let Some(field) = cli.x_field {
        config.fields.x = field;
    }
    if let Some(field) = cli.y_field {
        config.fields.y = field;
    }
    if let Some(field) = cli.char_field {
        config.fields.character = field;
    }

    let url = match cli.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };
    if url.is_empty() {
        return Err(anyhow::anyhow!("a document URL is required"));
    }

    decode_command(&url, &config, cli.quiet).await
}

fn prompt_for_url() -> Result<String> {
    print!("Document URL: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
