//! Wire access to the managed service.
//!
//! The model layer talks to the service through the [`Transport`] trait: a
//! capability that can GET a URI and PATCH a JSON document to it. Session
//! management, retries and connection reuse all live behind this seam.
//! [`HttpTransport`] is the built-in implementation (feature `remote`,
//! enabled by default).

use std::sync::Arc;

use crate::error::TransportError;

#[cfg(feature = "remote")]
use std::time::Duration;

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Read/write capability against the remote service.
///
/// `get` is assumed safe to repeat; `patch` applies a JSON merge to the
/// target resource. Implementations report failure, they never retry.
pub trait Transport: Send + Sync {
    /// Fetch the raw body at `uri`.
    fn get(&self, uri: &str) -> Result<Vec<u8>, TransportError>;

    /// Apply a partial JSON document to the resource at `uri`.
    fn patch(&self, uri: &str, body: &[u8]) -> Result<(), TransportError>;
}

/// Shared handle to a transport, cloned into every snapshot bound to it.
pub type SharedTransport = Arc<dyn Transport>;

/// Connection options for [`HttpTransport`].
///
/// Defaults: 10-second timeout, certificate verification on, no credentials.
#[cfg(feature = "remote")]
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    /// Request timeout; `None` keeps the default.
    pub timeout: Option<Duration>,
    /// Skip TLS verification. Lab equipment commonly ships self-signed
    /// certificates; leave this off anywhere that matters.
    pub accept_invalid_certs: bool,
    /// Session token sent as `X-Auth-Token`.
    pub token: Option<String>,
    /// Basic-auth credentials, used only when no token is set.
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Blocking HTTP implementation of [`Transport`].
///
/// Resource URIs in Redfish documents are server-relative
/// (`/redfish/v1/...`); they are joined against the service root given at
/// construction.
#[cfg(feature = "remote")]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base: reqwest::Url,
    config: HttpConfig,
}

#[cfg(feature = "remote")]
impl HttpTransport {
    /// Connect to a service root (e.g. `https://bmc.example.com`) with
    /// default options.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidBase` if the URL does not parse, or
    /// a network error if the underlying client cannot be built.
    pub fn new(base: &str) -> Result<Self, TransportError> {
        Self::with_config(base, HttpConfig::default())
    }

    /// Connect with explicit [`HttpConfig`] options.
    pub fn with_config(base: &str, config: HttpConfig) -> Result<Self, TransportError> {
        let base_url = reqwest::Url::parse(base).map_err(|e| TransportError::InvalidBase {
            url: base.to_string(),
            message: e.to_string(),
        })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout.unwrap_or(HTTP_TIMEOUT))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|source| TransportError::Network {
                uri: base.to_string(),
                source,
            })?;

        Ok(HttpTransport {
            client,
            base: base_url,
            config,
        })
    }

    /// Wrap in the shared handle expected by fetch operations.
    pub fn into_shared(self) -> SharedTransport {
        Arc::new(self)
    }

    fn resolve(&self, uri: &str) -> Result<reqwest::Url, TransportError> {
        self.base
            .join(uri)
            .map_err(|e| TransportError::InvalidBase {
                url: uri.to_string(),
                message: e.to_string(),
            })
    }

    fn authorize(&self, req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        if let Some(token) = &self.config.token {
            req.header("X-Auth-Token", token)
        } else if let Some(user) = &self.config.username {
            req.basic_auth(user, self.config.password.as_deref())
        } else {
            req
        }
    }

    fn check_status(
        uri: &str,
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, TransportError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(TransportError::Http {
                uri: uri.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(feature = "remote")]
impl Transport for HttpTransport {
    fn get(&self, uri: &str) -> Result<Vec<u8>, TransportError> {
        let url = self.resolve(uri)?;
        tracing::debug!(%uri, "GET");

        let response = self
            .authorize(self.client.get(url).header("Accept", "application/json"))
            .send()
            .map_err(|source| TransportError::Network {
                uri: uri.to_string(),
                source,
            })?;

        let response = Self::check_status(uri, response)?;
        let body = response
            .bytes()
            .map_err(|source| TransportError::Network {
                uri: uri.to_string(),
                source,
            })?;
        Ok(body.to_vec())
    }

    fn patch(&self, uri: &str, body: &[u8]) -> Result<(), TransportError> {
        let url = self.resolve(uri)?;
        tracing::debug!(%uri, bytes = body.len(), "PATCH");

        let response = self
            .authorize(
                self.client
                    .patch(url)
                    .header("Content-Type", "application/json")
                    .header("OData-Version", "4.0")
                    .body(body.to_vec()),
            )
            .send()
            .map_err(|source| TransportError::Network {
                uri: uri.to_string(),
                source,
            })?;

        Self::check_status(uri, response).map(|_| ())
    }
}
