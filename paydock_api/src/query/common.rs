//! Shared query infrastructure: the [`Query`] trait and [`SortDirection`].

use std::str::FromStr;

use url::Url;

/// Trait implemented by all search requests. Provides URL serialization of
/// the parameters that are actually set.
pub trait Query {
    /// Parameters in the order they are sent. Absent values are omitted.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    ///
    /// A query with no parameters leaves the URL untouched (no dangling `?`).
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }
}

/// Sort order for list results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest/smallest first).
    Asc,
    /// Descending order (newest/largest first). This is the API default.
    #[default]
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "ASC",
                SortDirection::Desc => "DESC",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Collects `name=value` pairs, skipping absent values and empty strings.
#[derive(Default)]
pub(crate) struct PairBuilder {
    pairs: Vec<(&'static str, String)>,
}

impl PairBuilder {
    pub(crate) fn text(mut self, name: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((name, value.to_string()));
        }
        self
    }

    pub(crate) fn display<T: std::fmt::Display>(mut self, name: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.pairs.push((name, value.to_string()));
        }
        self
    }

    pub(crate) fn build(self) -> Vec<(&'static str, String)> {
        self.pairs
    }
}
