//! Wazuh API HTTP client implementation.

use std::sync::Once;

use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Response};
use tracing::{debug, info, instrument, trace, warn};

use crate::auth::Credentials;
use crate::error::{CredentialsError, Error};
use crate::types::{BaseUrl, Params};

use super::endpoints::{
    AGENTS, AUTHENTICATE, AgentsQuery, MANAGER_STATS, StatsQuery, parse_auth_token,
};
use super::request::{Body, FilePart, RequestOptions, attach_body};

static INSECURE_TLS_NOTICE: Once = Once::new();

/// Announces, once per process, that certificate verification is off.
///
/// Later insecure clients stay silent. Returns true only for the call that
/// emitted the notice.
pub(crate) fn disable_insecure_warnings() -> bool {
    let mut emitted = false;
    INSECURE_TLS_NOTICE.call_once(|| {
        warn!(
            "TLS certificate verification disabled; \
             further insecure-connection warnings are suppressed"
        );
        emitted = true;
    });
    emitted
}

/// Settings for [`Client::connect`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: BaseUrl,
    pub credentials: Credentials,
    /// Verify the server's TLS certificate. Defaults to true.
    pub verify_tls: bool,
}

impl ClientConfig {
    pub fn new(base_url: BaseUrl, credentials: Credentials) -> Self {
        Self {
            base_url,
            credentials,
            verify_tls: true,
        }
    }

    /// Enables or disables TLS certificate verification.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }
}

/// An authenticated connection to a Wazuh manager.
///
/// The client owns a reusable HTTP transport and a set of default headers.
/// Authentication runs during [`Client::connect`] and stores the bearer
/// token in those headers; every later request carries it. Responses are
/// returned raw: status codes are not checked and nothing is retried.
///
/// # Example
///
/// ```no_run
/// use wazuh_client::{AgentsQuery, BaseUrl, Client, ClientConfig, Credentials};
///
/// # async fn example() -> Result<(), wazuh_client::Error> {
/// let config = ClientConfig::new(
///     BaseUrl::new("https://wazuh.example.com:55000")?,
///     Credentials::new("wazuh-wui", "password"),
/// )
/// .verify_tls(false);
/// let client = Client::connect(config).await?;
///
/// let response = client.list_agents(&AgentsQuery::with_status("active")).await?;
/// println!("{}", response.text().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: BaseUrl,
    credentials: Credentials,
    verify_tls: bool,
    headers: HeaderMap,
}

impl Client {
    /// Build a client and authenticate with the manager.
    ///
    /// # Errors
    ///
    /// Returns an error if the manager is unreachable or the authentication
    /// response does not carry `data.token`. No client is returned in that
    /// case.
    #[instrument(skip(config), fields(base_url = %config.base_url, username = %config.credentials.username()))]
    pub async fn connect(config: ClientConfig) -> Result<Self, Error> {
        let ClientConfig {
            base_url,
            credentials,
            verify_tls,
        } = config;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("wazuh-client/", env!("CARGO_PKG_VERSION")));
        if !verify_tls {
            disable_insecure_warnings();
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build()?;

        let mut client = Self {
            http,
            base_url,
            credentials,
            verify_tls,
            headers: HeaderMap::new(),
        };
        client.authenticate().await?;

        Ok(client)
    }

    /// Exchange the stored credentials for a bearer token.
    ///
    /// On success the default headers gain `Authorization: Bearer <token>`
    /// and `Content-Type: application/json`, replacing any earlier token.
    ///
    /// # Errors
    ///
    /// Transport failures are returned unchanged. A body that is not JSON,
    /// or that lacks `data` or `data.token`, fails with
    /// [`Error::Response`]. The HTTP status is not inspected.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn authenticate(&mut self) -> Result<(), Error> {
        let endpoint = self.base_url.endpoint(AUTHENTICATE);
        info!(username = %self.credentials.username(), "Authenticating");

        let mut headers = self.headers.clone();
        headers.remove(AUTHORIZATION);

        let response = self
            .http
            .get(&endpoint)
            .headers(headers)
            .basic_auth(self.credentials.username(), Some(self.credentials.password()))
            .send()
            .await?;
        trace!(status = %response.status(), "authentication response");

        let body = response.text().await?;
        let token = parse_auth_token(&body)?;

        self.headers.insert(AUTHORIZATION, token.to_header_value()?);
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!("Authenticated successfully");
        Ok(())
    }

    /// Send a request with the default headers.
    ///
    /// `endpoint` is a full URL (see [`Client::endpoint`]). When `files` is
    /// non-empty the request is sent as `multipart/form-data` and form
    /// fields in `body` become text parts.
    ///
    /// # Errors
    ///
    /// Transport failures are returned unchanged. Non-2xx responses are not
    /// errors.
    #[instrument(skip(self, params, body, files, options), fields(method = %method))]
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<&Params>,
        body: Option<Body>,
        files: Vec<FilePart>,
        options: &RequestOptions,
    ) -> Result<Response, Error> {
        debug!(endpoint, "API request");
        trace!(?params, "query parameters");

        let mut headers = self.headers.clone();
        headers.extend(options.headers.clone());
        if !files.is_empty() {
            // multipart sets its own boundary-carrying content type
            headers.remove(CONTENT_TYPE);
        }

        let mut builder = self.http.request(method, endpoint).headers(headers);
        if let Some(params) = params {
            builder = builder.query(params.as_pairs());
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let builder = attach_body(builder, body, files)?;

        let response = builder.send().await?;
        trace!(status = %response.status(), "API response");

        Ok(response)
    }

    /// Send a GET request.
    pub async fn get(&self, endpoint: &str, params: Option<&Params>) -> Result<Response, Error> {
        self.request(
            Method::GET,
            endpoint,
            params,
            None,
            Vec::new(),
            &RequestOptions::default(),
        )
        .await
    }

    /// Send a POST request.
    pub async fn post(
        &self,
        endpoint: &str,
        params: Option<&Params>,
        body: Option<Body>,
    ) -> Result<Response, Error> {
        self.request(
            Method::POST,
            endpoint,
            params,
            body,
            Vec::new(),
            &RequestOptions::default(),
        )
        .await
    }

    /// Fetch manager statistics for one day.
    ///
    /// Without a date the current UTC date is used.
    #[instrument(skip(self))]
    pub async fn get_stats(&self, query: &StatsQuery) -> Result<Response, Error> {
        let endpoint = self.base_url.endpoint(MANAGER_STATS);
        let params = query.to_params(Utc::now());
        self.get(&endpoint, Some(&params)).await
    }

    /// List agents, optionally filtered.
    #[instrument(skip(self))]
    pub async fn list_agents(&self, query: &AgentsQuery) -> Result<Response, Error> {
        let endpoint = self.base_url.endpoint(AGENTS);
        self.get(&endpoint, Some(&query.to_params())).await
    }

    /// Returns the full URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        self.base_url.endpoint(path)
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns whether TLS certificates are verified.
    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Returns the credentials used for authentication.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Replace the credentials.
    ///
    /// Credentials are write-once: this only succeeds while the stored pair
    /// is empty. It does not re-authenticate.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::Immutable`] if credentials are already set.
    pub fn set_credentials(&mut self, credentials: Credentials) -> Result<(), Error> {
        if !self.credentials.is_empty() {
            return Err(CredentialsError::Immutable.into());
        }
        self.credentials = credentials;
        Ok(())
    }

    /// Returns true once a bearer token is held.
    pub fn is_authenticated(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }
}
