//! Wazuh REST API client.
//!
//! This module provides the authenticated HTTP client together with the
//! endpoint paths, query types and request bodies it accepts.

mod client;
pub mod endpoints;
mod request;

pub use client::{Client, ClientConfig};
pub use endpoints::{AgentsQuery, StatsQuery};
pub use request::{Body, FilePart, RequestOptions};
