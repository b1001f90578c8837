//! Agents command implementation.

use anyhow::{Context, Result};
use clap::Args;

use wazuh_client::{AgentsQuery, Client};

use crate::output;

#[derive(Args, Debug)]
pub struct AgentsArgs {
    /// Status filter, comma-separated (e.g. active,disconnected)
    #[arg(long)]
    pub status: String,

    /// Comma-separated agent IDs
    #[arg(long)]
    pub agents_list: Option<String>,

    /// Ask the manager to pretty-print its response
    #[arg(long)]
    pub pretty: bool,

    /// Wait for the manager to finish the request
    #[arg(long)]
    pub wait_for_complete: bool,
}

pub async fn run(client: &Client, args: AgentsArgs) -> Result<()> {
    let query = AgentsQuery {
        status: args.status,
        agents_list: args.agents_list,
        pretty: args.pretty,
        wait_for_complete: args.wait_for_complete,
    };

    let response = client
        .list_agents(&query)
        .await
        .context("Failed to list agents")?;

    output::response(response, false).await
}
