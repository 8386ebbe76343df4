use std::time::Duration;

use reqwest::Url;
use serde_json::{Map, Value};

use crate::config::Endpoints;
use crate::error::FetchError;

const USER_AGENT: &str = concat!("chara-curator/", env!("CARGO_PKG_VERSION"));

/// Where character data comes from.
///
/// The sync pipeline only talks to this trait, so it can run against the
/// live API or an in-memory fixture.
pub trait CharacterSource {
    /// Fetch the index: character key => index metadata, in upstream order.
    fn fetch_index(&self) -> Result<Map<String, Value>, FetchError>;

    /// Fetch the full raw record for one character.
    fn fetch_detail(&self, key: &str) -> Result<Value, FetchError>;
}

/// Blocking HTTP client for the game-data API.
pub struct GameDataClient {
    http: reqwest::blocking::Client,
    index_url: Url,
    detail_base: Url,
}

impl GameDataClient {
    /// Create a client for the given endpoints. No request is made here.
    pub fn new(endpoints: &Endpoints) -> Result<Self, FetchError> {
        let index_url = parse_url(&endpoints.index_url)?;
        let detail_base = parse_url(&endpoints.detail_url)?;
        if detail_base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl {
                url: endpoints.detail_url.clone(),
                message: "detail URL cannot take a path segment".to_string(),
            });
        }

        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(endpoints.timeout_secs.map(Duration::from_secs))
            .build()?;

        Ok(Self {
            http,
            index_url,
            detail_base,
        })
    }

    /// URL of the detail record for `key`, with the key appended as a single
    /// percent-encoded path segment.
    pub fn detail_url(&self, key: &str) -> Result<Url, FetchError> {
        let mut url = self.detail_base.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl {
                url: self.detail_base.to_string(),
                message: "detail URL cannot take a path segment".to_string(),
            })?
            .pop_if_empty()
            .push(key);
        Ok(url)
    }

    /// GET `url` and decode the body as JSON. Any non-2xx status is an error.
    fn get_json(&self, url: Url) -> Result<Value, FetchError> {
        log::debug!("GET {url}");

        let resp = self.http.get(url.clone()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let text = resp.text()?;
        serde_json::from_str(&text).map_err(|source| FetchError::Json {
            url: url.to_string(),
            source,
        })
    }
}

impl CharacterSource for GameDataClient {
    fn fetch_index(&self) -> Result<Map<String, Value>, FetchError> {
        match self.get_json(self.index_url.clone())? {
            Value::Object(index) => Ok(index),
            other => Err(FetchError::unexpected_shape(format!(
                "index from {} is not a JSON object (got {})",
                self.index_url,
                json_kind(&other)
            ))),
        }
    }

    fn fetch_detail(&self, key: &str) -> Result<Value, FetchError> {
        let url = self.detail_url(key)?;
        self.get_json(url)
    }
}

fn parse_url(raw: &str) -> Result<Url, FetchError> {
    Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(detail_url: &str) -> Endpoints {
        Endpoints {
            index_url: "https://api.example.com/v1/characters".to_string(),
            detail_url: detail_url.to_string(),
            timeout_secs: None,
        }
    }

    #[test]
    fn test_detail_url_appends_key() {
        let client = GameDataClient::new(&endpoints("https://api.example.com/v1/character")).unwrap();
        assert_eq!(
            client.detail_url("1001").unwrap().as_str(),
            "https://api.example.com/v1/character/1001"
        );
    }

    #[test]
    fn test_detail_url_trailing_slash() {
        let client = GameDataClient::new(&endpoints("https://api.example.com/v1/character/")).unwrap();
        assert_eq!(
            client.detail_url("1001").unwrap().as_str(),
            "https://api.example.com/v1/character/1001"
        );
    }

    #[test]
    fn test_detail_url_escapes_key() {
        let client = GameDataClient::new(&endpoints("https://api.example.com/c")).unwrap();
        assert_eq!(
            client.detail_url("a b/c?d").unwrap().as_str(),
            "https://api.example.com/c/a%20b%2Fc%3Fd"
        );
    }

    #[test]
    fn test_invalid_urls_rejected() {
        assert!(matches!(
            GameDataClient::new(&endpoints("not a url")),
            Err(FetchError::InvalidUrl { .. })
        ));
        assert!(matches!(
            GameDataClient::new(&endpoints("mailto:someone@example.com")),
            Err(FetchError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&serde_json::json!([1])), "array");
        assert_eq!(json_kind(&serde_json::json!("x")), "string");
    }
}
