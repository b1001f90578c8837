//! Wazuh API endpoint paths and query types.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::auth::AuthToken;
use crate::error::ResponseError;
use crate::types::Params;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Exchanges Basic credentials for a bearer token.
pub const AUTHENTICATE: &str = "security/user/authenticate";

/// Manager statistics for a single day.
pub const MANAGER_STATS: &str = "manager/stats";

/// Agent listing.
pub const AGENTS: &str = "agents";

/// Date format accepted by the `date` parameter of [`MANAGER_STATS`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Query Types
// ============================================================================

/// Query for [`MANAGER_STATS`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsQuery {
    pub pretty: bool,
    pub wait_for_complete: bool,
    /// Day to report on as `YYYY-MM-DD`. Defaults to the current UTC date
    /// when absent or empty.
    pub date: Option<String>,
}

impl StatsQuery {
    /// Query for a specific day.
    pub fn for_date(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Self::default()
        }
    }

    pub(crate) fn to_params(&self, now: DateTime<Utc>) -> Params {
        let date = match self.date.as_deref() {
            Some(date) if !date.is_empty() => date.to_string(),
            _ => now.format(DATE_FORMAT).to_string(),
        };

        Params::new()
            .with("pretty", self.pretty)
            .with("wait_for_complete", self.wait_for_complete)
            .with("date", date)
    }
}

/// Query for [`AGENTS`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AgentsQuery {
    /// Agent status filter, sent verbatim. Several statuses must already be
    /// joined with commas (`"active,disconnected"`).
    pub status: String,
    /// Comma-separated agent IDs.
    pub agents_list: Option<String>,
    pub pretty: bool,
    pub wait_for_complete: bool,
}

impl AgentsQuery {
    /// Query for agents with the given status.
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("status", &self.status)
            .with_opt("agents_list", self.agents_list.as_deref())
            .with("pretty", self.pretty)
            .with("wait_for_complete", self.wait_for_complete)
    }
}

// ============================================================================
// Response Parsing
// ============================================================================

/// Reads `data.token` from an authentication response body.
pub(crate) fn parse_auth_token(body: &str) -> Result<AuthToken, ResponseError> {
    let json: Value = serde_json::from_str(body)?;

    let data = json
        .get("data")
        .ok_or(ResponseError::MissingField { field: "data" })?;
    let token = data
        .get("token")
        .ok_or(ResponseError::MissingField { field: "data.token" })?;
    let token = token.as_str().ok_or(ResponseError::UnexpectedType {
        field: "data.token",
        expected: "string",
    })?;

    Ok(AuthToken::new(token))
}
