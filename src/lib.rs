//! # dwd-wfs
//!
//! Blocking client for the Web Feature Service of the Deutscher Wetterdienst
//! (DWD) GeoServer at <https://maps.dwd.de>.
//!
//! A query is a set of named parameters. Keys are case-insensitive and
//! `typename` is required; `version`, `request`, `outputformat` and
//! `timeout` fall back to [`WfsConfig`] defaults, and `cql_filter` is only
//! sent when given. The response is returned as decoded JSON, or `None`
//! when anything goes wrong.
//!
//! ```no_run
//! let warnings = dwd_wfs::query([
//!     ("typename", "dwd:Warnungen_Gemeinden"),
//!     ("cql_filter", "WARNCELLID=807055017"),
//! ]);
//! ```
//!
//! [`WfsClient::try_query`] returns a [`QueryError`] instead of logging it,
//! and [`WfsClient::query_features`] reads the response as a GeoJSON
//! feature collection.

pub mod features;
pub mod types;
pub mod wfs;

pub use types::{ErrorKind, QueryError, RequestParameters, WfsQuery};
pub use wfs::{WfsClient, WfsConfig};

/// Queries the DWD GeoServer with a default [`WfsClient`].
pub fn query<I, K, V>(params: I) -> Option<serde_json::Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    WfsClient::default().query(params)
}
