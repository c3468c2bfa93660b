use crate::adapters::http::ReqwestTransport;
use crate::config::toml_config::{ClientConfig, DEFAULT_LANGUAGE};
use crate::core::decode::decode;
use crate::core::request::{build_url, ApiMethod, Endpoints, QueryParams};
use crate::domain::model::{Item, ItemsResponse, Position};
use crate::domain::ports::Transport;
use crate::utils::error::{HereError, Result};
use serde::de::DeserializeOwned;

/// Handle for the HERE Search REST API.
///
/// Every method performs exactly one GET and returns once the response is
/// decoded. The handle keeps no state between calls apart from its settings.
#[derive(Debug, Clone)]
pub struct HereApi<T: Transport = ReqwestTransport> {
    api_key: String,
    lang: String,
    endpoints: Endpoints,
    transport: T,
}

impl HereApi<ReqwestTransport> {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(api_key, ReqwestTransport::new())
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let mut api = Self::new(config.api_key()).with_endpoints(config.endpoints());
        api.set_language(config.language());
        api
    }
}

impl<T: Transport> HereApi<T> {
    pub fn with_transport(api_key: impl Into<String>, transport: T) -> Self {
        Self {
            api_key: api_key.into(),
            lang: DEFAULT_LANGUAGE.to_string(),
            endpoints: Endpoints::default(),
            transport,
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Sets the response language, e.g. `en-US`. The tag is passed through as-is.
    // TODO: check the tag against the language codes HERE documents as supported
    pub fn set_language(&mut self, lang: impl Into<String>) {
        self.lang = lang.into();
    }

    pub fn language(&self) -> &str {
        &self.lang
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Places matching a free-form query near `position`, restricted by `in_filter`
    /// (for example `countryCode:USA`).
    pub async fn discover(
        &self,
        position: Position,
        limit: u32,
        query: &str,
        in_filter: &str,
    ) -> Result<Vec<Item>> {
        let params = QueryParams::new()
            .at(position)
            .limit(limit)
            .add("q", query)
            .add("in", in_filter);
        self.get_items(ApiMethod::Discover, params).await
    }

    /// Places or addresses matching `query`.
    pub async fn geocode(&self, query: &str) -> Result<Vec<Item>> {
        let params = QueryParams::new().add("q", query);
        self.get_items(ApiMethod::Geocode, params).await
    }

    /// Completions for partial input, ordered by distance from `position`.
    pub async fn autosuggest(&self, position: Position, limit: u32, query: &str) -> Result<Vec<Item>> {
        let params = QueryParams::new().at(position).limit(limit).add("q", query);
        self.get_items(ApiMethod::Autosuggest, params).await
    }

    /// Places around `position` in the given categories, nearest first.
    /// An empty category list leaves the filter off.
    pub async fn browse<S: AsRef<str>>(
        &self,
        position: Position,
        limit: u32,
        categories: &[S],
    ) -> Result<Vec<Item>> {
        let params = QueryParams::new()
            .at(position)
            .limit(limit)
            .categories(categories);
        self.get_items(ApiMethod::Browse, params).await
    }

    /// Details of a single item by its HERE id.
    pub async fn lookup(&self, id: &str) -> Result<Item> {
        let params = QueryParams::new().add("id", id);
        self.request(ApiMethod::Lookup, params).await
    }

    /// Addresses and places located at `position`.
    pub async fn reverse_geocode(&self, position: Position) -> Result<Vec<Item>> {
        let params = QueryParams::new().at(position);
        self.get_items(ApiMethod::ReverseGeocode, params).await
    }

    async fn get_items(&self, method: ApiMethod, params: QueryParams) -> Result<Vec<Item>> {
        let response: ItemsResponse = self.request(method, params).await?;
        tracing::debug!("{} returned {} items", method, response.items.len());
        Ok(response.items)
    }

    async fn request<R: DeserializeOwned>(&self, method: ApiMethod, params: QueryParams) -> Result<R> {
        let endpoint = self.endpoints.get(method);
        let url = build_url(endpoint, &params, &self.lang, &self.api_key)?;

        tracing::debug!("Making {} request to: {}", method, endpoint);
        let response = self.transport.get(&url).await?;
        tracing::debug!("{} response status: {}", method, response.status);

        decode(&response).inspect_err(|e| {
            if let HereError::Api { status, .. } | HereError::UnexpectedResponse { status, .. } = e {
                tracing::warn!("{} request rejected (HTTP {}): {}", method, status, e);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::RawResponse;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use url::Url;

    #[derive(Clone, Default)]
    struct MockTransport {
        requests: Arc<Mutex<Vec<Url>>>,
        status: u16,
        body: String,
    }

    impl MockTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
                status,
                body: body.to_string(),
            }
        }

        fn last_query(&self) -> HashMap<String, String> {
            let requests = self.requests.lock().unwrap();
            let url = requests.last().expect("no request was sent");
            url.query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        }

        fn last_path(&self) -> String {
            let requests = self.requests.lock().unwrap();
            requests.last().unwrap().path().to_string()
        }
    }

    impl Transport for MockTransport {
        async fn get(&self, url: &Url) -> Result<RawResponse> {
            self.requests.lock().unwrap().push(url.clone());
            Ok(RawResponse::new(self.status, self.body.clone()))
        }
    }

    const TWO_ITEMS: &str =
        r#"{"items":[{"title":"First","id":"here:1"},{"title":"Second","id":"here:2"}]}"#;

    #[tokio::test]
    async fn test_discover_sends_position_limit_query_and_filter() {
        let transport = MockTransport::replying(200, TWO_ITEMS);
        let api = HereApi::with_transport("key", transport.clone());

        let items = api
            .discover(Position::new(42.36346, -71.05444), 1, "restaurant", "countryCode:USA")
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        let query = transport.last_query();
        assert_eq!(transport.last_path(), "/v1/discover");
        assert_eq!(query["at"], "42.36346,-71.05444");
        assert_eq!(query["limit"], "1");
        assert_eq!(query["q"], "restaurant");
        assert_eq!(query["in"], "countryCode:USA");
        assert_eq!(query["lang"], "ru-RU");
        assert_eq!(query["apiKey"], "key");
    }

    #[tokio::test]
    async fn test_geocode_sends_only_query() {
        let transport = MockTransport::replying(200, TWO_ITEMS);
        let api = HereApi::with_transport("key", transport.clone());

        api.geocode("5 Rue Daunou, 75002 Paris, France").await.unwrap();

        let query = transport.last_query();
        assert_eq!(query.len(), 3);
        assert_eq!(query["q"], "5 Rue Daunou, 75002 Paris, France");
    }

    #[tokio::test]
    async fn test_browse_without_categories_omits_filter() {
        let transport = MockTransport::replying(200, TWO_ITEMS);
        let api = HereApi::with_transport("key", transport.clone());

        let none: [&str; 0] = [];
        api.browse(Position::new(-23.000813, -43.351629), 2, &none)
            .await
            .unwrap();

        let query = transport.last_query();
        assert!(!query.contains_key("categories"));
        assert_eq!(query["limit"], "2");
    }

    #[tokio::test]
    async fn test_lookup_decodes_single_item() {
        let transport = MockTransport::replying(200, r#"{"title":"Café","id":"here:pds:place:276u0vhj"}"#);
        let api = HereApi::with_transport("key", transport.clone());

        let item = api.lookup("here:pds:place:276u0vhj").await.unwrap();

        assert_eq!(item.title, "Café");
        assert_eq!(transport.last_query()["id"], "here:pds:place:276u0vhj");
    }

    #[tokio::test]
    async fn test_set_language_applies_to_following_requests() {
        let transport = MockTransport::replying(200, TWO_ITEMS);
        let mut api = HereApi::with_transport("key", transport.clone());

        api.set_language("en-GB");
        api.reverse_geocode(Position::new(51.5, -0.12)).await.unwrap();

        assert_eq!(api.language(), "en-GB");
        assert_eq!(transport.last_query()["lang"], "en-GB");
        assert_eq!(transport.last_path(), "/v1/revgeocode");
    }

    #[tokio::test]
    async fn test_non_200_is_api_error() {
        let transport = MockTransport::replying(
            403,
            r#"{"error":"Forbidden","error_description":"These credentials do not authorize access"}"#,
        );
        let api = HereApi::with_transport("key", transport);

        let err = api.autosuggest(Position::new(52.93175, 12.77165), 5, "res").await.unwrap_err();
        assert_eq!(err.to_string(), "Forbidden: These credentials do not authorize access");
    }

    #[tokio::test]
    async fn test_invalid_endpoint_fails_before_sending() {
        let transport = MockTransport::replying(200, TWO_ITEMS);
        let mut endpoints = Endpoints::default();
        endpoints.geocode = "not a url".to_string();
        let api = HereApi::with_transport("key", transport.clone()).with_endpoints(endpoints);

        let err = api.geocode("Berlin").await.unwrap_err();

        assert!(matches!(err, HereError::InvalidUrl(_)));
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_from_config() {
        let mut config = ClientConfig::new("cfg-key");
        config.client.language = Some("fr-FR".to_string());
        config.endpoints.base_url = Some("http://localhost:1234".to_string());

        let api = HereApi::from_config(&config);
        assert_eq!(api.language(), "fr-FR");
        assert_eq!(api.endpoints().browse, "http://localhost:1234/v1/browse");
    }
}
