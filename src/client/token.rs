use std::sync::{PoisonError, RwLock};

use serde_json::Value;

use super::http::HttpTransport;
use crate::domain::{ClientId, ClientSecret, Credentials, Params};
use crate::endpoints::table::ACCESS_TOKEN;
use crate::transport::{encode_request, normalize};

const GRANT_TYPE: &str = "client_credentials";

/// Holds the bearer token and trades credentials for a new one.
///
/// Refreshes are serialized: a caller that waited on another caller's refresh
/// reuses the fresh token instead of exchanging credentials again.
pub(crate) struct TokenManager {
    credentials: Credentials,
    token: RwLock<Option<String>>,
    refresh_lock: tokio::sync::Mutex<()>,
}

impl TokenManager {
    pub(crate) fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            token: RwLock::new(None),
            refresh_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub(crate) fn current(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Exchange credentials for a token unconditionally.
    pub(crate) async fn refresh(&self, http: &dyn HttpTransport, base_url: &str) -> bool {
        let _guard = self.refresh_lock.lock().await;
        self.exchange(http, base_url).await
    }

    /// Replace `stale` with a fresh token.
    ///
    /// Skips the exchange and reports success when another call already replaced it.
    pub(crate) async fn refresh_stale(
        &self,
        http: &dyn HttpTransport,
        base_url: &str,
        stale: Option<&str>,
    ) -> bool {
        let _guard = self.refresh_lock.lock().await;
        let current = self.current();
        if current.is_some() && current.as_deref() != stale {
            tracing::debug!("access token already refreshed by a concurrent call");
            return true;
        }
        self.exchange(http, base_url).await
    }

    async fn exchange(&self, http: &dyn HttpTransport, base_url: &str) -> bool {
        let params = Params::new()
            .with("grant_type", GRANT_TYPE)
            .with(ClientId::FIELD, self.credentials.client_id().as_str())
            .with(ClientSecret::FIELD, self.credentials.client_secret().as_str());
        let descriptor = ACCESS_TOKEN.request(&[], params);

        let request = match encode_request(base_url, &descriptor, None) {
            Ok(request) => request,
            Err(err) => {
                tracing::error!(error = %err, "failed to encode credentials exchange");
                return false;
            }
        };

        let response = match http.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = %err, "credentials exchange failed");
                return false;
            }
        };

        let result = normalize(response.status, &response.body);
        if result.http_status_code != 200 {
            tracing::error!(
                status = result.http_status_code,
                "credentials exchange rejected, check client id and secret"
            );
            return false;
        }

        let token = result
            .data
            .as_ref()
            .filter(|data| data.is_object())
            .and_then(|data| data.get("access_token"))
            .and_then(Value::as_str);

        match token {
            Some(token) => {
                *self.token.write().unwrap_or_else(PoisonError::into_inner) =
                    Some(token.to_owned());
                tracing::info!("obtained access token");
                true
            }
            None => {
                tracing::error!("credentials exchange response has no access_token");
                false
            }
        }
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("client_id", self.credentials.client_id())
            .field("has_token", &self.current().is_some())
            .finish()
    }
}
