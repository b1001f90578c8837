//! CLI argument definitions.

use clap::builder::FalseyValueParser;
use clap::{Args, Parser};

use crate::commands::Command;

/// Query a Wazuh manager from the command line.
#[derive(Parser, Debug)]
#[command(name = "wazuh")]
#[command(author, version = env!("WAZUH_CLI_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Manager address and credentials.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Manager API base URL, e.g. https://wazuh.example.com:55000
    #[arg(long, env = "WAZUH_URL", global = true)]
    pub url: Option<String>,

    /// API username
    #[arg(long, env = "WAZUH_USERNAME", global = true)]
    pub username: Option<String>,

    /// API password
    #[arg(long, env = "WAZUH_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification
    ///
    /// The environment variable accepts 1/0, true/false, yes/no, on/off.
    #[arg(
        long,
        env = "WAZUH_INSECURE",
        global = true,
        value_parser = FalseyValueParser::new()
    )]
    pub insecure: bool,
}

/// Parses a `key=value` argument.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}
