//! Bearer token type.

use std::fmt;

use reqwest::header::HeaderValue;

use crate::error::InvalidInputError;

/// A bearer token returned by the authentication endpoint.
///
/// The token is opaque and has no tracked expiry. It only ever leaves this
/// type as the value of the `Authorization` header.
#[derive(Clone)]
pub(crate) struct AuthToken(String);

impl AuthToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Builds the `Authorization: Bearer <token>` header value.
    pub(crate) fn to_header_value(&self) -> Result<HeaderValue, InvalidInputError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0)).map_err(|e| {
            InvalidInputError::Header {
                name: "authorization".to_string(),
                reason: e.to_string(),
            }
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

// Hide token value in Debug output
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}
