mod client;
mod config;

use std::fmt::Display;

pub use config::*;
use ureq::Agent;

/// Blocking client for a GeoServer WFS endpoint.
///
/// Holds no per-request state; clones share the underlying connection pool
/// and can be used from several threads at once.
#[derive(Clone)]
pub struct WfsClient {
    agent: Agent,
    config: WfsConfig,
}

impl Default for WfsClient {
    fn default() -> Self {
        WfsClient::new(WfsConfig::default())
    }
}

impl WfsClient {
    pub fn new(config: WfsConfig) -> Self {
        // Status codes are checked by hand so they surface as QueryError::HttpStatus.
        let agent_config = Agent::config_builder()
            .http_status_as_error(false)
            .build();
        let agent: Agent = agent_config.into();
        WfsClient { agent, config }
    }

    pub fn config(&self) -> &WfsConfig {
        &self.config
    }

    pub fn set_base_url(&mut self, url: impl Display) {
        self.config.base_url = url.to_string();
    }
}
