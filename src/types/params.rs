use std::collections::BTreeMap;

/// Request parameters keyed by lower-cased name.
///
/// Values are kept exactly as supplied. Percent-encoding happens once, when
/// the query URL is assembled, so a value is never encoded twice.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    entries: BTreeMap<String, String>,
}

impl RequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, lower-casing the key. A later spelling of the
    /// same key replaces an earlier one.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(key.as_ref().to_lowercase(), value.into());
    }

    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParameters
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RequestParameters::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K, V> Extend<(K, V)> for RequestParameters
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercased() {
        let params: RequestParameters = [("TypeName", "dwd:Warnungen_Gemeinden")].into_iter().collect();
        assert_eq!(params.get("typename"), Some("dwd:Warnungen_Gemeinden"));
        assert_eq!(params.get("TYPENAME"), Some("dwd:Warnungen_Gemeinden"));
        assert_eq!(params.iter().next(), Some(("typename", "dwd:Warnungen_Gemeinden")));
    }

    #[test]
    fn later_spelling_wins() {
        let params = RequestParameters::new()
            .with("typename", "first")
            .with("TYPENAME", "second");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("typename"), Some("second"));
    }

    #[test]
    fn values_are_stored_raw() {
        let params = RequestParameters::new().with("cql_filter", "A=1 & B%2");
        assert_eq!(params.get("cql_filter"), Some("A=1 & B%2"));
    }

    #[test]
    fn unknown_keys_are_kept() {
        let mut params = RequestParameters::new();
        params.extend([("Foo", "bar")]);
        assert!(params.contains("foo"));
        assert!(!params.is_empty());
    }
}
