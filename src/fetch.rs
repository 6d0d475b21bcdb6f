use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{DocgridError, DocgridResult};

static HTML_CONTENT_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^text/html").expect("static pattern"));

/// Fetch the raw markup for a published document URL.
///
/// The one suspension point in the pipeline: a single GET, awaited before
/// normalization begins. A non-200 status or a content type other than
/// `text/html` is a fetch failure; callers absorb fetch failures at this
/// boundary and degrade to "no data" instead of aborting.
pub async fn fetch_document(url: &str) -> DocgridResult<String> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| DocgridError::fetch(url, e.to_string()))?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(DocgridError::fetch(url, format!("status code {}", status)));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !HTML_CONTENT_TYPE.is_match(&content_type) {
        return Err(DocgridError::fetch(
            url,
            format!("expected text/html but received {:?}", content_type),
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| DocgridError::fetch(url, e.to_string()))?;
    debug!("fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
