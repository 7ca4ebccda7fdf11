//! Client layer: token lifecycle, retry-after-refresh and transport orchestration.

mod config;
pub(crate) mod http;
mod token;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

pub use config::SendPulseConfig;
use http::{HttpTransport, ReqwestTransport};
use token::TokenManager;

use crate::domain::{Credentials, RequestDescriptor, SendPulseResponse, ValidationError};
use crate::transport::{HttpRequest, HttpResponse, encode_request, normalize};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.sendpulse.com";

const UNAUTHORIZED: u16 = 401;

#[derive(Debug, thiserror::Error)]
/// Errors raised while constructing a [`SendPulseClient`].
///
/// API calls themselves never fail with this type; they return a
/// [`SendPulseResponse`] instead.
pub enum SendPulseError {
    /// HTTP client could not be built (TLS backend, invalid user-agent, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A required environment variable is not set.
    #[error("environment variable {name} is not set")]
    MissingEnv { name: &'static str },

    /// An environment variable holds a value that cannot be parsed.
    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
/// Builder for [`SendPulseClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct SendPulseClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SendPulseClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (scheme and host, optionally a path prefix).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to every request, including token refreshes.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SendPulseClient`].
    pub fn build(self) -> Result<SendPulseClient, SendPulseError> {
        let base_url = validate_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SendPulseError::Transport(Box::new(err)))?;

        Ok(SendPulseClient::with_transport(
            self.credentials,
            base_url,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

fn validate_base_url(input: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidBaseUrl {
        input: input.to_owned(),
    };
    let parsed = url::Url::parse(input.trim()).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(invalid());
    }
    Ok(parsed.as_str().trim_end_matches('/').to_owned())
}

#[derive(Clone)]
/// High-level SendPulse client.
///
/// Every operation validates its arguments, encodes the request, and returns a
/// [`SendPulseResponse`]. A `401` triggers one token refresh and one resend per
/// call. Clones share the same token.
pub struct SendPulseClient {
    base_url: String,
    tokens: Arc<TokenManager>,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for SendPulseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendPulseClient")
            .field("base_url", &self.base_url)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl SendPulseClient {
    /// Create a client using the default base URL.
    ///
    /// No network call is made; the first request obtains a token on demand. Call
    /// [`SendPulseClient::authenticate`] to fetch one eagerly.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(
            credentials,
            DEFAULT_BASE_URL.to_owned(),
            Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        )
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SendPulseClientBuilder {
        SendPulseClientBuilder::new(credentials)
    }

    /// Build a client from [`SendPulseConfig`].
    pub fn from_config(config: SendPulseConfig) -> Result<Self, SendPulseError> {
        let timeout = config.timeout();
        let mut builder =
            Self::builder(Credentials::new(config.client_id, config.client_secret)?);
        if let Some(base_url) = config.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        builder.build()
    }

    pub(crate) fn with_transport(
        credentials: Credentials,
        base_url: String,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            base_url,
            tokens: Arc::new(TokenManager::new(credentials)),
            http,
        }
    }

    /// Exchange credentials for a bearer token now.
    ///
    /// Returns `false` when the exchange fails; the previous token (if any) is kept.
    pub async fn authenticate(&self) -> bool {
        self.tokens.refresh(self.http.as_ref(), &self.base_url).await
    }

    /// Whether a bearer token is currently held.
    pub fn has_token(&self) -> bool {
        self.tokens.current().is_some()
    }

    /// Validate, then execute. Validation failures never touch the network.
    pub(crate) async fn dispatch(
        &self,
        build: impl FnOnce() -> Result<RequestDescriptor, ValidationError>,
    ) -> SendPulseResponse {
        match build() {
            Ok(descriptor) => self.execute(descriptor).await,
            Err(err) => {
                tracing::debug!(error = %err, "request rejected before sending");
                err.into()
            }
        }
    }

    /// Send a request, refreshing the token and resending once on `401`.
    pub(crate) async fn execute(&self, descriptor: RequestDescriptor) -> SendPulseResponse {
        let stale = self.bearer_for(&descriptor);
        let mut request = match encode_request(&self.base_url, &descriptor, stale.as_deref()) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(
                    path = %descriptor.path,
                    error = %err,
                    "failed to encode request body"
                );
                return SendPulseResponse::local_error(format!(
                    "failed to encode request body: {err}"
                ));
            }
        };

        let mut response = match self.send(&descriptor, request.clone(), false).await {
            Ok(response) => response,
            Err(failure) => return failure,
        };

        if response.status == UNAUTHORIZED && descriptor.use_auth {
            tracing::warn!(
                path = %descriptor.path,
                "authorization rejected, refreshing access token"
            );
            if !self
                .tokens
                .refresh_stale(self.http.as_ref(), &self.base_url, stale.as_deref())
                .await
            {
                tracing::warn!("access token refresh failed, resending with previous token");
            }

            request.bearer = self.bearer_for(&descriptor);
            response = match self.send(&descriptor, request, true).await {
                Ok(response) => response,
                Err(failure) => return failure,
            };
        }

        normalize(response.status, &response.body)
    }

    fn bearer_for(&self, descriptor: &RequestDescriptor) -> Option<String> {
        if descriptor.use_auth {
            self.tokens.current()
        } else {
            None
        }
    }

    async fn send(
        &self,
        descriptor: &RequestDescriptor,
        request: HttpRequest,
        resend: bool,
    ) -> Result<HttpResponse, SendPulseResponse> {
        tracing::debug!(
            method = %descriptor.method,
            path = %descriptor.path,
            resend,
            "sending request"
        );

        match self.http.send(request).await {
            Ok(response) => {
                tracing::debug!(
                    status = response.status,
                    path = %descriptor.path,
                    "received response"
                );
                Ok(response)
            }
            Err(err) => {
                tracing::error!(
                    method = %descriptor.method,
                    path = %descriptor.path,
                    error = %err,
                    "request failed"
                );
                Err(SendPulseResponse::local_error(format!("transport error: {err}")))
            }
        }
    }
}
