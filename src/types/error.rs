use std::fmt::Display;

#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("missing required parameter 'typename'")]
    MissingTypename,

    #[error("invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),

    #[error("request failed: {0}")]
    Network(#[from] ureq::Error),

    #[error("server responded with HTTP status {0}")]
    HttpStatus(u16),

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response is not a GeoJSON feature collection: {0}")]
    Geojson(#[from] geojson::Error),
}

/// Coarse category of a [`QueryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingRequiredParameter,
    InvalidParameter,
    Network,
    HttpStatus,
    Decode,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::MissingRequiredParameter => "missing required parameter",
            ErrorKind::InvalidParameter => "invalid parameter",
            ErrorKind::Network => "network error",
            ErrorKind::HttpStatus => "http status error",
            ErrorKind::Decode => "decode error",
        };
        f.write_str(name)
    }
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::MissingTypename => ErrorKind::MissingRequiredParameter,
            QueryError::InvalidTimeout(_) => ErrorKind::InvalidParameter,
            QueryError::Network(_) => ErrorKind::Network,
            QueryError::HttpStatus(_) => ErrorKind::HttpStatus,
            QueryError::Decode(_) | QueryError::Geojson(_) => ErrorKind::Decode,
        }
    }

    /// True when the query was rejected before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            QueryError::MissingTypename | QueryError::InvalidTimeout(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_map_to_their_kind() {
        let err = QueryError::HttpStatus(500);
        assert_eq!(err.kind(), ErrorKind::HttpStatus);
        assert_eq!(err.to_string(), "server responded with HTTP status 500");
        assert!(!err.is_local());
    }

    #[test]
    fn decode_errors_keep_the_parser_message() {
        let err: QueryError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().starts_with("response is not valid JSON"));
    }

    #[test]
    fn parameter_errors_are_local() {
        assert!(QueryError::MissingTypename.is_local());
        assert_eq!(
            QueryError::InvalidTimeout("soon".into()).kind(),
            ErrorKind::InvalidParameter
        );
    }
}
