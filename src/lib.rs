//! Builds a school events board from a published spreadsheet export.
//!
//! One run fetches the sheet as CSV, parses it into rows, sorts the dated rows into
//! today / this week / next week / later / past, and renders the result as an HTML page.

pub mod classify;
pub mod config;
pub mod fetch;
pub mod process;
pub mod render;

use anyhow::Result;
use chrono::NaiveDate;
use maud::Markup;
use reqwest::Client;
use tracing::{error, info, instrument};

use crate::config::Config;

/// Fetch, parse, classify and render the board for `today`.
///
/// Nothing is written here; any error means no part of the board is usable.
#[instrument(level = "info", skip(client, config), fields(source = %config.source))]
pub async fn build_board(client: &Client, config: &Config, today: NaiveDate) -> Result<Markup> {
    let text = fetch::fetch_text(client, &config.source).await?;
    let events = process::parse_events(&text);
    info!(events = events.len(), "parsed sheet");

    let classification = classify::classify(events, today)?;
    let regions = render::render_regions(&classification);
    Ok(render::render_page(&regions, &config.title))
}

/// Build the board and write it to `config.output`.
///
/// On any failure the output is replaced by the error page and the error is returned.
pub async fn run(config: &Config, today: NaiveDate) -> Result<()> {
    let client = Client::new();
    match build_board(&client, config, today).await {
        Ok(page) => {
            render::write_page(&config.output, &page)?;
            info!(output = %config.output.display(), "board written");
            Ok(())
        }
        Err(e) => {
            error!(error = ?e, "Error fetching data");
            render::write_page(&config.output, &render::render_error_page(&config.title))?;
            Err(e)
        }
    }
}
