//! Stats command implementation.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::Args;

use wazuh_client::api::endpoints::DATE_FORMAT;
use wazuh_client::{Client, StatsQuery};

use crate::output;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Day to report on (YYYY-MM-DD, defaults to today in UTC)
    #[arg(long, conflicts_with = "yesterday")]
    pub date: Option<String>,

    /// Report on yesterday (UTC)
    #[arg(long)]
    pub yesterday: bool,

    /// Ask the manager to pretty-print its response
    #[arg(long)]
    pub pretty: bool,

    /// Wait for the manager to finish the request
    #[arg(long)]
    pub wait_for_complete: bool,
}

pub async fn run(client: &Client, args: StatsArgs) -> Result<()> {
    let date = if args.yesterday {
        Some((Utc::now() - Duration::days(1)).format(DATE_FORMAT).to_string())
    } else {
        args.date
    };

    let query = StatsQuery {
        pretty: args.pretty,
        wait_for_complete: args.wait_for_complete,
        date,
    };

    let response = client
        .get_stats(&query)
        .await
        .context("Failed to fetch statistics")?;

    output::response(response, false).await
}
