use crate::domain::model::Position;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// The six HERE Search operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Discover,
    Geocode,
    Autosuggest,
    Browse,
    Lookup,
    ReverseGeocode,
}

impl ApiMethod {
    /// Path segment used by the service, e.g. `revgeocode`.
    pub fn path_name(&self) -> &'static str {
        match self {
            ApiMethod::Discover => "discover",
            ApiMethod::Geocode => "geocode",
            ApiMethod::Autosuggest => "autosuggest",
            ApiMethod::Browse => "browse",
            ApiMethod::Lookup => "lookup",
            ApiMethod::ReverseGeocode => "revgeocode",
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_name())
    }
}

/// Base URL for each operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub discover: String,
    pub geocode: String,
    pub autosuggest: String,
    pub browse: String,
    pub lookup: String,
    pub revgeocode: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            discover: "https://discover.search.hereapi.com/v1/discover".to_string(),
            geocode: "https://geocode.search.hereapi.com/v1/geocode".to_string(),
            autosuggest: "https://autosuggest.search.hereapi.com/v1/autosuggest".to_string(),
            browse: "https://browse.search.hereapi.com/v1/browse".to_string(),
            lookup: "https://lookup.search.hereapi.com/v1/lookup".to_string(),
            revgeocode: "https://revgeocode.search.hereapi.com/v1/revgeocode".to_string(),
        }
    }
}

impl Endpoints {
    /// Routes every operation to `{base}/v1/{name}`.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let at = |method: ApiMethod| format!("{}/v1/{}", base, method.path_name());

        Self {
            discover: at(ApiMethod::Discover),
            geocode: at(ApiMethod::Geocode),
            autosuggest: at(ApiMethod::Autosuggest),
            browse: at(ApiMethod::Browse),
            lookup: at(ApiMethod::Lookup),
            revgeocode: at(ApiMethod::ReverseGeocode),
        }
    }

    pub fn get(&self, method: ApiMethod) -> &str {
        match method {
            ApiMethod::Discover => &self.discover,
            ApiMethod::Geocode => &self.geocode,
            ApiMethod::Autosuggest => &self.autosuggest,
            ApiMethod::Browse => &self.browse,
            ApiMethod::Lookup => &self.lookup,
            ApiMethod::ReverseGeocode => &self.revgeocode,
        }
    }
}

/// Ordered query parameters of one request, before the shared `lang`/`apiKey` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((key, value.into()));
        self
    }

    pub fn at(self, position: Position) -> Self {
        self.add("at", position.to_string())
    }

    pub fn limit(self, limit: u32) -> Self {
        self.add("limit", limit.to_string())
    }

    /// Adds `categories` only when at least one category is given.
    pub fn categories<S: AsRef<str>>(self, categories: &[S]) -> Self {
        if categories.is_empty() {
            return self;
        }
        let joined = join_categories(categories);
        self.add("categories", joined)
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

pub fn join_categories<S: AsRef<str>>(categories: &[S]) -> String {
    categories
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds the final request URL: method parameters first, then `lang` and `apiKey`.
pub fn build_url(base: &str, params: &QueryParams, lang: &str, api_key: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    {
        let mut query = url.query_pairs_mut();
        for (key, value) in params.pairs() {
            query.append_pair(key, value);
        }
        query.append_pair("lang", lang);
        query.append_pair("apiKey", api_key);
    }
    Ok(url)
}
