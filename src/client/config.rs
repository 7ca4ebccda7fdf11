use std::time::Duration;

use serde::Deserialize;

use super::SendPulseError;

pub(crate) const ENV_CLIENT_ID: &str = "SENDPULSE_CLIENT_ID";
pub(crate) const ENV_CLIENT_SECRET: &str = "SENDPULSE_CLIENT_SECRET";
pub(crate) const ENV_BASE_URL: &str = "SENDPULSE_BASE_URL";
pub(crate) const ENV_TIMEOUT_SECS: &str = "SENDPULSE_TIMEOUT_SECS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// Client settings, deserializable from any serde source or read from the environment.
pub struct SendPulseConfig {
    /// OAuth client id from the SendPulse account settings.
    pub client_id: String,
    /// OAuth client secret paired with `client_id`.
    pub client_secret: String,
    /// API root; [`DEFAULT_BASE_URL`](super::DEFAULT_BASE_URL) when unset.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Whole-request timeout in seconds; no timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// `User-Agent` header override.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl SendPulseConfig {
    /// Read `SENDPULSE_CLIENT_ID`, `SENDPULSE_CLIENT_SECRET` and the optional
    /// `SENDPULSE_BASE_URL` / `SENDPULSE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, SendPulseError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, SendPulseError> {
        let required = |name: &'static str| lookup(name).ok_or(SendPulseError::MissingEnv { name });

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(value) => Some(value.trim().parse::<u64>().map_err(|_| {
                SendPulseError::InvalidEnv {
                    name: ENV_TIMEOUT_SECS,
                    value,
                }
            })?),
            None => None,
        };

        Ok(Self {
            client_id: required(ENV_CLIENT_ID)?,
            client_secret: required(ENV_CLIENT_SECRET)?,
            base_url: lookup(ENV_BASE_URL),
            timeout_secs,
            user_agent: None,
        })
    }

    /// [`timeout_secs`](Self::timeout_secs) as a [`Duration`].
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (*k, (*v).to_owned()))
            .collect::<HashMap<_, _>>();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_required_and_optional_variables() {
        let config = SendPulseConfig::from_lookup(lookup(&[
            (ENV_CLIENT_ID, "id"),
            (ENV_CLIENT_SECRET, "secret"),
            (ENV_BASE_URL, "http://localhost:8080"),
            (ENV_TIMEOUT_SECS, " 15 "),
        ]))
        .unwrap();

        assert_eq!(config.client_id, "id");
        assert_eq!(config.client_secret, "secret");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn missing_secret_is_reported_by_name() {
        let err = SendPulseConfig::from_lookup(lookup(&[(ENV_CLIENT_ID, "id")])).unwrap_err();
        assert!(matches!(
            err,
            SendPulseError::MissingEnv {
                name: ENV_CLIENT_SECRET
            }
        ));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = SendPulseConfig::from_lookup(lookup(&[
            (ENV_CLIENT_ID, "id"),
            (ENV_CLIENT_SECRET, "secret"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SendPulseError::InvalidEnv { .. }));
    }

    #[test]
    fn deserializes_with_optional_fields_defaulted() {
        let config: SendPulseConfig =
            serde_json::from_str(r#"{"client_id":"id","client_secret":"secret"}"#).unwrap();
        assert_eq!(config.base_url, None);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn deserializes_every_documented_field() {
        let config: SendPulseConfig = serde_json::from_str(
            r#"{"client_id":"id","client_secret":"secret","base_url":"http://localhost:9000",
                "timeout_secs":30,"user_agent":"crm-sync/2.0"}"#,
        )
        .unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.user_agent.as_deref(), Some("crm-sync/2.0"));
    }
}
