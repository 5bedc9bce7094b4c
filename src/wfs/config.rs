use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::{QueryError, duration_from_secs};

pub const DEFAULT_BASE_URL: &str = "https://maps.dwd.de/geoserver/dwd/ows?service=WFS";
pub const DEFAULT_WFS_VERSION: &str = "2.0.0";
pub const DEFAULT_WFS_REQUEST: &str = "GetFeature";
pub const DEFAULT_WFS_OUTPUTFORMAT: &str = "application/json";
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;
// Warning layers with full geometries run to tens of megabytes.
pub const DEFAULT_MAX_BODY_SIZE: u64 = 64 * 1024 * 1024;

/// Defaults applied to every query sent by a [`WfsClient`](super::WfsClient).
///
/// `base_url` must already carry the start of the query string
/// (`?service=WFS`); parameters are appended with `&`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WfsConfig {
    pub base_url: String,
    pub version: String,
    pub request: String,
    pub outputformat: String,
    pub timeout_secs: f64,
    pub max_body_size: u64,
}

impl Default for WfsConfig {
    fn default() -> Self {
        WfsConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_WFS_VERSION.to_string(),
            request: DEFAULT_WFS_REQUEST.to_string(),
            outputformat: DEFAULT_WFS_OUTPUTFORMAT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl WfsConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn timeout(&self) -> Result<Duration, QueryError> {
        duration_from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dwd_geoserver() {
        let config = WfsConfig::default();
        assert_eq!(config.base_url, "https://maps.dwd.de/geoserver/dwd/ows?service=WFS");
        assert_eq!(config.version, "2.0.0");
        assert_eq!(config.request, "GetFeature");
        assert_eq!(config.outputformat, "application/json");
        assert_eq!(config.timeout().unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: WfsConfig = serde_json::from_str(r#"{"timeout_secs": 2.5}"#).unwrap();
        assert_eq!(config.timeout().unwrap(), Duration::from_millis(2500));
        assert_eq!(config.version, DEFAULT_WFS_VERSION);
        assert_eq!(config.max_body_size, DEFAULT_MAX_BODY_SIZE);
    }

    #[test]
    fn non_positive_timeout_is_invalid() {
        let config = WfsConfig {
            timeout_secs: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.timeout(), Err(QueryError::InvalidTimeout(_))));
    }
}
