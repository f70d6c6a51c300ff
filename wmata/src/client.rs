//! WMATA HTTP client and request dispatcher.
//!
//! All resource facades funnel through [`Client::fetch`], which builds the
//! URL, attaches the API key, performs one GET bounded by the configured
//! timeout, and decodes the body. There is no retry, caching, or
//! connection management beyond what reqwest does natively.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use tracing::debug;

use crate::body::{Body, Mode};
use crate::bus::Bus;
use crate::bus_predictions::BusPredictions;
use crate::error::Error;
use crate::incidents::Incidents;
use crate::rail::Rail;
use crate::rail_predictions::RailPredictions;
use crate::request::{Params, Service, UrlShape, build_path};

/// Default base URL for the WMATA API.
const DEFAULT_BASE_URL: &str = "https://api.wmata.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the API key is attached on each request.
///
/// Different generations of the upstream clients relied on the header or
/// the query parameter; one placement is chosen at construction and
/// applies uniformly to every facade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyPlacement {
    /// `api_key` request header only.
    Header,
    /// `api_key` query parameter only.
    Query,
    /// Both header and query parameter (the default).
    #[default]
    Both,
}

impl KeyPlacement {
    fn in_header(self) -> bool {
        matches!(self, KeyPlacement::Header | KeyPlacement::Both)
    }

    fn in_query(self) -> bool {
        matches!(self, KeyPlacement::Query | KeyPlacement::Both)
    }
}

/// Configuration for the WMATA client.
///
/// Immutable once the client is constructed; safe to share across
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key issued by the WMATA developer portal
    pub api_key: String,
    /// Base URL for the API (defaults to production WMATA)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Response encoding mode
    pub mode: Mode,
    /// How the API key is attached to requests
    pub key_placement: KeyPlacement,
}

impl ClientConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            mode: Mode::default(),
            key_placement: KeyPlacement::default(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the encoding mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the encoding mode from its string name.
    ///
    /// Fails with [`Error::Configuration`] for anything other than
    /// `"json"` or `"xml"`; no network access is performed.
    pub fn with_mode_str(mut self, mode: &str) -> Result<Self, Error> {
        self.mode = mode.parse()?;
        Ok(self)
    }

    /// Set where the API key is attached.
    pub fn with_key_placement(mut self, placement: KeyPlacement) -> Self {
        self.key_placement = placement;
        self
    }
}

/// WMATA API client.
///
/// Cheap to clone; holds only the reqwest client and the immutable
/// configuration.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    mode: Mode,
    key_placement: KeyPlacement,
}

/// Error envelope returned by the WMATA gateway on failed requests.
/// The field is spelled `message` by the subscription gateway and
/// `Message` by the services themselves.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(alias = "Message")]
    message: Option<String>,
}

impl Client {
    /// Create a new WMATA client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();

        if config.key_placement.in_header() {
            let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
                Error::Configuration("API key is not a valid header value".to_string())
            })?;
            headers.insert(HeaderName::from_static("api_key"), api_key);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            mode: config.mode,
            key_placement: config.key_placement,
        })
    }

    /// Bus route and stop information.
    pub fn bus(&self) -> Bus<'_> {
        Bus::new(self)
    }

    /// Rail and bus incident reports.
    pub fn incidents(&self) -> Incidents<'_> {
        Incidents::new(self)
    }

    /// Rail line and station information.
    pub fn rail(&self) -> Rail<'_> {
        Rail::new(self)
    }

    /// Real-time train arrival predictions.
    pub fn rail_predictions(&self) -> RailPredictions<'_> {
        RailPredictions::new(self)
    }

    /// Real-time bus arrival predictions.
    pub fn bus_predictions(&self) -> BusPredictions<'_> {
        BusPredictions::new(self)
    }

    /// Dispatch one request and decode the response.
    ///
    /// The single await point of the crate; blocks until the exchange
    /// completes or the timeout elapses.
    pub(crate) async fn fetch(
        &self,
        service: Service,
        endpoint: &str,
        shape: UrlShape,
        params: Params,
    ) -> Result<Body, Error> {
        let url = build_path(&self.base_url, service, endpoint, self.mode, shape, &params);

        let mut pairs = match shape {
            UrlShape::Query => params.query_pairs(),
            UrlShape::PathAppended => Vec::new(),
        };
        if self.key_placement.in_query() {
            pairs.push(("api_key", self.api_key.clone()));
        }

        debug!(%url, service = service.as_str(), "dispatching WMATA request");

        let mut request = self.http.get(&url);
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        Body::decode(self.mode, &text)
    }
}

/// Pull the human-readable message out of an error body, falling back to
/// the raw text when it is not the documented envelope.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            message: Some(message),
        }) => message,
        _ => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ClientConfig::new("test-key");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.mode, Mode::Json);
        assert_eq!(config.key_placement, KeyPlacement::Both);
    }

    #[test]
    fn config_builder() {
        let config = ClientConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(60)
            .with_mode(Mode::Xml)
            .with_key_placement(KeyPlacement::Header);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.mode, Mode::Xml);
        assert_eq!(config.key_placement, KeyPlacement::Header);
    }

    #[test]
    fn config_mode_from_string() {
        let config = ClientConfig::new("test-key").with_mode_str("xml").unwrap();
        assert_eq!(config.mode, Mode::Xml);

        let err = ClientConfig::new("test-key")
            .with_mode_str("yaml")
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn client_creation() {
        let config = ClientConfig::new("test-key");
        assert!(Client::new(config).is_ok());
    }

    #[test]
    fn client_rejects_unprintable_api_key() {
        let config = ClientConfig::new("bad\nkey");
        let err = Client::new(config).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn error_message_prefers_envelope() {
        assert_eq!(
            error_message(r#"{"statusCode": 401, "message": "Access denied"}"#),
            "Access denied"
        );
        assert_eq!(
            error_message(r#"{"Message": "No such route"}"#),
            "No such route"
        );
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn key_placement_flags() {
        assert!(KeyPlacement::Both.in_header());
        assert!(KeyPlacement::Both.in_query());
        assert!(KeyPlacement::Header.in_header());
        assert!(!KeyPlacement::Header.in_query());
        assert!(!KeyPlacement::Query.in_header());
        assert!(KeyPlacement::Query.in_query());
    }
}
