//! Output formatting helpers.

use anyhow::{Context, Result};
use colored::Colorize;
use wazuh_client::Response;

/// Print the status line to stderr and the body to stdout.
///
/// JSON bodies are re-indented when `pretty` is set; anything else is
/// printed verbatim.
pub async fn response(response: Response, pretty: bool) -> Result<()> {
    let status = response.status();
    let label = status.to_string();
    if status.is_success() {
        eprintln!("{} {}", "✓".green(), label);
    } else {
        eprintln!("{} {}", "✗".red(), label);
    }

    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(json) if pretty => println!("{}", serde_json::to_string_pretty(&json)?),
        _ => println!("{}", body),
    }

    Ok(())
}
