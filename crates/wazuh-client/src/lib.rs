//! wazuh-client - Minimal Wazuh manager API client
//!
//! This library authenticates against a Wazuh manager with HTTP Basic
//! credentials, keeps the returned bearer token in the client's default
//! headers, and forwards requests to the REST API. All operations flow
//! through a [`Client`] object.
//!
//! # Example
//!
//! ```no_run
//! use wazuh_client::{BaseUrl, Client, ClientConfig, Credentials, StatsQuery};
//!
//! # async fn example() -> Result<(), wazuh_client::Error> {
//! let base_url = BaseUrl::new("https://wazuh.example.com:55000")?;
//! let credentials = Credentials::new("wazuh-wui", "password");
//! let client = Client::connect(ClientConfig::new(base_url, credentials)).await?;
//!
//! let response = client.get_stats(&StatsQuery::default()).await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod error;
pub mod types;

// Re-export primary types at crate root for convenience
pub use api::{AgentsQuery, Body, Client, ClientConfig, FilePart, RequestOptions, StatsQuery};
pub use auth::Credentials;
pub use error::Error;
pub use types::{BaseUrl, Params};

pub use reqwest::{Method, Response};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
