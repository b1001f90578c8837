//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use wazuh_client::{Client, Params};

use crate::cli::parse_key_val;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// API path, e.g. manager/info
    pub path: String,

    /// Query parameter (repeatable)
    #[arg(long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(client: &Client, args: GetArgs) -> Result<()> {
    let params: Params = args.params.into_iter().collect();
    let endpoint = client.endpoint(&args.path);

    let response = client
        .get(&endpoint, Some(&params))
        .await
        .with_context(|| format!("Failed to GET {}", args.path))?;

    output::response(response, args.pretty).await
}
