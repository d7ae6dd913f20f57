use async_trait::async_trait;
use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{HeaderMap, Method};
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::config::Config;
use crate::error::{GriddleError, Result};
use crate::response::Response;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// One fully assembled outbound call, ready for a transport to execute.
///
/// The path is server-relative with all identifiers already interpolated;
/// resolving it against a base address is the transport's concern.
#[derive(Debug)]
pub struct PreparedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

impl PreparedRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        PreparedRequest {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Attach a serialized JSON payload. The content-type header is set
    /// only when the payload is non-empty.
    pub fn json(mut self, body: Vec<u8>) -> Self {
        if !body.is_empty() {
            self.headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
            self.body = Some(Bytes::from(body));
        }
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The single seam to the network: performs one HTTP exchange and returns
/// the normalized response, or a transport failure as-is.
///
/// Implementations must be safe for concurrent use. The client issues each
/// logical operation as exactly one `perform` call; there are no retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(&self, request: PreparedRequest) -> Result<Response>;
}

/// Transport backed by [`reqwest::Client`].
///
/// Resolves paths against the configured base address, injects basic or
/// bearer auth, and applies the per-call timeout (falling back to the
/// configured default). Deadline enforcement happens here; expired calls
/// surface as transport errors.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    username: Option<String>,
    password: Option<String>,
    token: Option<String>,
    default_timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GriddleError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(HttpTransport {
            client,
            base_url: config.base_url()?,
            username: config.username.clone(),
            password: config.password.clone(),
            token: config.token.clone(),
            default_timeout: config.timeout(),
        })
    }

    fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("has_basic_auth", &self.username.is_some())
            .field("has_token", &self.token.is_some())
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(&self, request: PreparedRequest) -> Result<Response> {
        let url = self.url_for(&request.path)?;
        tracing::debug!(method = %request.method, path = %request.path, "performing request");

        let mut builder = self
            .client
            .request(request.method, url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        if let Some(ref token) = self.token {
            builder = builder.bearer_auth(token);
        } else if let Some(ref username) = self.username {
            builder = builder.basic_auth(username, self.password.as_deref());
        }

        if let Some(timeout) = request.timeout.or(self.default_timeout) {
            builder = builder.timeout(timeout);
        }

        let res = builder.send().await?;
        tracing::debug!(status = res.status().as_u16(), "response received");

        Ok(Response::from_http(res))
    }
}
