// src/fetch/mod.rs
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};
use url::Url;

/// Published CSV export of the events sheet.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vT8AfAtB-eXyuOyoQZJ48kDLOJUiE3MbaxF8XGwN5K9gQD6biT5oNFymac8vVZnBf8N9bwFTj_MBXxf/pub?gid=0&single=true&output=csv";

/// Read the sheet export from `source`.
///
/// `http`/`https` URLs get a single GET (no retry); `file://` URLs and plain
/// paths are read from disk.
#[instrument(level = "info", skip(client))]
pub async fn fetch_text(client: &Client, source: &str) -> Result<String> {
    match Url::parse(source) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => get_text(client, &url).await,
        Ok(url) if url.scheme() == "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| anyhow!("not a local file URL: {}", url))?;
            read_local(&path).await
        }
        _ => read_local(Path::new(source)).await,
    }
}

async fn get_text(client: &Client, url: &Url) -> Result<String> {
    debug!("Fetching text from {}", url);
    let body = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status {}", url))?
        .text()
        .await
        .with_context(|| format!("Reading text from {}", url))?;
    debug!(bytes = body.len(), "fetched sheet");
    Ok(body)
}

async fn read_local(path: &Path) -> Result<String> {
    debug!("Reading sheet from {}", path.display());
    fs::read_to_string(path)
        .await
        .with_context(|| format!("reading sheet file {}", path.display()))
}
