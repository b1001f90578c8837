//! Builds an authenticated client from the connection arguments.

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

use wazuh_client::{BaseUrl, Client, ClientConfig, Credentials};

use crate::cli::ConnectionArgs;

pub async fn connect(args: &ConnectionArgs) -> Result<Client> {
    let url = args
        .url
        .as_deref()
        .context("No manager URL. Pass --url or set WAZUH_URL.")?;
    let username = args
        .username
        .as_deref()
        .context("No username. Pass --username or set WAZUH_USERNAME.")?;
    let password = args
        .password
        .as_deref()
        .context("No password. Pass --password or set WAZUH_PASSWORD.")?;

    let base_url = BaseUrl::new(url).context("Invalid manager URL")?;
    let config = ClientConfig::new(base_url, Credentials::new(username, password))
        .verify_tls(!args.insecure);

    debug!(
        base_url = %config.base_url,
        username,
        verify_tls = config.verify_tls,
        "Connecting to manager"
    );
    eprintln!("{}", "Authenticating...".dimmed());

    Client::connect(config)
        .await
        .context("Failed to authenticate")
}
