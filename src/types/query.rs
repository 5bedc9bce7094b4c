use std::time::Duration;

use super::{QueryError, RequestParameters};

/// A single WFS request, with optional fields falling back to the client's
/// [`WfsConfig`](crate::WfsConfig) defaults.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct WfsQuery {
    pub typename: String,
    pub version: Option<String>,
    pub request: Option<String>,
    pub outputformat: Option<String>,
    pub cql_filter: Option<String>,
    pub timeout: Option<Duration>,
}

impl WfsQuery {
    pub fn new(typename: impl Into<String>) -> Self {
        WfsQuery {
            typename: typename.into(),
            ..Default::default()
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn request(mut self, request: impl Into<String>) -> Self {
        self.request = Some(request.into());
        self
    }

    pub fn outputformat(mut self, outputformat: impl Into<String>) -> Self {
        self.outputformat = Some(outputformat.into());
        self
    }

    pub fn cql_filter(mut self, filter: impl Into<String>) -> Self {
        self.cql_filter = Some(filter.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates a parameter mapping. Unrecognized keys are ignored.
    pub fn from_params(params: &RequestParameters) -> Result<Self, QueryError> {
        let typename = params.get("typename").ok_or(QueryError::MissingTypename)?;
        let timeout = params.get("timeout").map(parse_timeout).transpose()?;

        Ok(WfsQuery {
            typename: typename.to_string(),
            version: params.get("version").map(str::to_string),
            request: params.get("request").map(str::to_string),
            outputformat: params.get("outputformat").map(str::to_string),
            cql_filter: params.get("cql_filter").map(str::to_string),
            timeout,
        })
    }
}

/// Coerces a timeout given in (possibly fractional) seconds.
pub fn parse_timeout(raw: &str) -> Result<Duration, QueryError> {
    let invalid = || QueryError::InvalidTimeout(raw.to_string());
    let secs: f64 = raw.trim().parse().map_err(|_| invalid())?;
    duration_from_secs(secs).map_err(|_| invalid())
}

pub fn duration_from_secs(secs: f64) -> Result<Duration, QueryError> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(QueryError::InvalidTimeout(secs.to_string()));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| QueryError::InvalidTimeout(secs.to_string()))
}
