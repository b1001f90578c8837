//! Subcommand implementations.

mod agents;
mod get;
mod post;
mod stats;

use anyhow::Result;
use clap::Subcommand;
use tracing::info;

use wazuh_client::Client;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show manager statistics for a day
    Stats(stats::StatsArgs),

    /// List agents
    Agents(agents::AgentsArgs),

    /// Send a GET request to any API path
    Get(get::GetArgs),

    /// Send a POST request to any API path
    Post(post::PostArgs),
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Stats(_) => "stats",
            Command::Agents(_) => "agents",
            Command::Get(_) => "get",
            Command::Post(_) => "post",
        }
    }
}

pub async fn handle(client: &Client, cmd: Command) -> Result<()> {
    info!(command = cmd.name(), "Running command");
    match cmd {
        Command::Stats(args) => stats::run(client, args).await,
        Command::Agents(args) => agents::run(client, args).await,
        Command::Get(args) => get::run(client, args).await,
        Command::Post(args) => post::run(client, args).await,
    }
}
