//! Login credentials type.

use std::fmt;

/// Basic authentication credentials for the Wazuh API.
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use wazuh_client::Credentials;
///
/// let creds = Credentials::new("wazuh-wui", "secret");
/// assert_eq!(creds.username(), "wazuh-wui");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// Use this only when constructing the Basic authorization header.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Returns true if neither a username nor a password is set.
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
