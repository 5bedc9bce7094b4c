use std::time::Duration;

use geojson::FeatureCollection;
use serde_json::Value;
use tracing::{debug, warn};

use crate::features::feature_collection_from_value;
use crate::types::{QueryError, RequestParameters, WfsQuery};

use super::WfsClient;

impl WfsClient {
    /// Sends a WFS request built from loosely typed parameters.
    ///
    /// Keys are matched case-insensitively; `typename` is required. Any
    /// failure is logged and collapses to `None`.
    pub fn query<I, K, V>(&self, params: I) -> Option<Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let params: RequestParameters = params.into_iter().collect();
        self.try_query(&params).map_err(report).ok()
    }

    pub fn try_query(&self, params: &RequestParameters) -> Result<Value, QueryError> {
        let query = WfsQuery::from_params(params)?;
        self.fetch(&query)
    }

    /// Like [`query`](Self::query), but interprets the response as a GeoJSON
    /// feature collection.
    pub fn query_features<I, K, V>(&self, params: I) -> Option<FeatureCollection>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let params: RequestParameters = params.into_iter().collect();
        self.try_query_features(&params).map_err(report).ok()
    }

    pub fn try_query_features(
        &self,
        params: &RequestParameters,
    ) -> Result<FeatureCollection, QueryError> {
        let value = self.try_query(params)?;
        Ok(feature_collection_from_value(value)?)
    }

    pub fn fetch(&self, query: &WfsQuery) -> Result<Value, QueryError> {
        let body = self.fetch_body(query)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn fetch_body(&self, query: &WfsQuery) -> Result<String, QueryError> {
        let timeout = self.timeout_for(query)?;
        let url = self.query_url(query);
        debug!(%url, ?timeout, "Sending WFS request");

        let mut response = self
            .agent
            .get(url.as_str())
            .config()
            .timeout_global(Some(timeout))
            .build()
            .call()?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::HttpStatus(status.as_u16()));
        }

        let body = response
            .body_mut()
            .with_config()
            .limit(self.config.max_body_size)
            .read_to_string()?;
        debug!(bytes = body.len(), "Got WFS response");
        Ok(body)
    }

    /// Builds the request URL. Parameters are appended in a fixed order and
    /// every value is percent-encoded exactly once.
    pub fn query_url(&self, query: &WfsQuery) -> String {
        let config = &self.config;
        let mut url = config.base_url.clone();

        let params = [
            ("version", query.version.as_deref().unwrap_or(&config.version)),
            ("request", query.request.as_deref().unwrap_or(&config.request)),
            ("typename", query.typename.as_str()),
            (
                "outputformat",
                query.outputformat.as_deref().unwrap_or(&config.outputformat),
            ),
        ];
        for (key, value) in params {
            push_param(&mut url, key, value);
        }

        // GeoServer only recognises the upper-case spelling.
        if let Some(filter) = &query.cql_filter {
            push_param(&mut url, "CQL_FILTER", filter);
        }
        url
    }

    pub fn timeout_for(&self, query: &WfsQuery) -> Result<Duration, QueryError> {
        match query.timeout {
            Some(timeout) => Ok(timeout),
            None => self.config.timeout(),
        }
    }
}

fn push_param(url: &mut String, key: &str, value: &str) {
    url.push('&');
    url.push_str(key);
    url.push('=');
    url.push_str(&urlencoding::encode(value));
}

fn report(err: QueryError) -> QueryError {
    warn!(kind = %err.kind(), "An error occurred: {err}");
    err
}
