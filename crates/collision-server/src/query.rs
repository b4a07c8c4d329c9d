//! Query-string access with first-occurrence semantics.

use axum::extract::Query;
use axum::http::Uri;

/// Raw request parameters in query-string order.
///
/// Blank values are dropped, so `?a=&a=2` reads `a` as `"2"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self {
            pairs: pairs.into_iter().filter(|(_, value)| !value.is_empty()).collect(),
        }
    }

    /// Decodes the query string of `uri`; an undecodable query is treated as empty.
    pub fn from_uri(uri: &Uri) -> Self {
        match Query::<Vec<(String, String)>>::try_from_uri(uri) {
            Ok(Query(pairs)) => Self::new(pairs),
            Err(_) => Self::default(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// A finite real number, surrounding whitespace ignored.
    pub fn parse_float(&self, name: &str) -> Option<f64> {
        self.get(name)?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// The value if it is exactly one of `allowed`.
    pub fn parse_choice<'a>(&self, name: &str, allowed: &[&'a str]) -> Option<&'a str> {
        let value = self.get(name)?;
        allowed.iter().find(|choice| **choice == value).copied()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
