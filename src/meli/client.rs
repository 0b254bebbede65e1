//! HTTP client for the MercadoLibre search API.

use crate::config::Config;
use crate::error::Result;
use crate::meli::models::SearchPage;
use crate::meli::sites::Site;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Production API host.
const API_BASE_URL: &str = "https://api.mercadolibre.com";

/// Trait for paged search fetching - enables mocking for tests.
#[async_trait]
pub trait MeliSearch: Send + Sync {
    /// Fetches one page of search results at the given offset.
    ///
    /// Returns `Ok(None)` when the response status is not in the
    /// approved list; the caller is expected to skip the page.
    async fn search(&self, offset: u32) -> Result<Option<SearchPage>>;

    /// Returns the site this client queries.
    fn site(&self) -> Site;
}

/// Search API client for a single site and query.
pub struct MeliClient {
    client: reqwest::Client,
    site: Site,
    query: String,
    approved_statuses: Vec<u16>,
    base_url: Option<String>,
}

impl MeliClient {
    /// Creates a new client from the configuration.
    pub fn new(config: &Config, site: Site) -> Result<Self> {
        Self::with_base_url(config, site, None)
    }

    /// Creates a new client with an optional custom base URL (for testing).
    pub fn with_base_url(config: &Config, site: Site, base_url: Option<String>) -> Result<Self> {
        // Transport defaults only: no timeout override, no retries.
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            site,
            query: config.query.clone(),
            approved_statuses: config.approved_statuses.clone(),
            base_url,
        })
    }

    /// Returns the base URL (custom for testing, or the API host).
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(API_BASE_URL)
    }

    fn search_url(&self, offset: u32) -> String {
        format!(
            "{}/sites/{}/search?q={}&offset={}&sort=id",
            self.base_url(),
            self.site,
            urlencoding::encode(&self.query),
            offset
        )
    }
}

#[async_trait]
impl MeliSearch for MeliClient {
    async fn search(&self, offset: u32) -> Result<Option<SearchPage>> {
        let url = self.search_url(offset);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !self.approved_statuses.contains(&status.as_u16()) {
            warn!("Status {} not approved, no data for offset {}", status, offset);
            return Ok(None);
        }

        let body = response.text().await?;
        let page: SearchPage = serde_json::from_str(&body)?;
        Ok(Some(page))
    }

    fn site(&self) -> Site {
        self.site
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeliError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_test_config() -> Config {
        Config {
            query: "tv 4k".to_string(),
            condition: "new".to_string(),
            pages: 100,
            output: "dataset.csv".into(),
            approved_statuses: vec![200],
        }
    }

    fn page_body(ids: &[&str]) -> String {
        let results: Vec<String> = ids
            .iter()
            .map(|id| {
                format!(
                    r#"{{ "id": "{}", "title": "Smart TV", "price": 1000.0,
                         "domain_id": "MLA-TELEVISIONS", "condition": "new",
                         "attributes": [] }}"#,
                    id
                )
            })
            .collect();
        format!(r#"{{ "results": [{}] }}"#, results.join(","))
    }

    #[test]
    fn test_search_url_shape() {
        let config = make_test_config();
        let client = MeliClient::new(&config, Site::Mla).unwrap();

        assert_eq!(
            client.search_url(7),
            "https://api.mercadolibre.com/sites/MLA/search?q=tv%204k&offset=7&sort=id"
        );
    }

    #[test]
    fn test_query_encoding() {
        let encoded = urlencoding::encode("tv 4k");
        assert_eq!(encoded, "tv%204k");
    }

    #[tokio::test]
    async fn test_search_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/MLA/search"))
            .and(query_param("q", "tv 4k"))
            .and(query_param("offset", "0"))
            .and(query_param("sort", "id"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page_body(&["MLA1", "MLA2"])))
            .mount(&mock_server)
            .await;

        let config = make_test_config();
        let client =
            MeliClient::with_base_url(&config, Site::Mla, Some(mock_server.uri())).unwrap();

        let page = client.search(0).await.unwrap().unwrap();
        assert_eq!(page.count(), 2);
        assert_eq!(page.results[0].id, "MLA1");
    }

    #[tokio::test]
    async fn test_search_404_is_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/MLA/search"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let config = make_test_config();
        let client =
            MeliClient::with_base_url(&config, Site::Mla, Some(mock_server.uri())).unwrap();

        let result = client.search(0).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_search_500_is_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/MLB/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let config = make_test_config();
        let client =
            MeliClient::with_base_url(&config, Site::Mlb, Some(mock_server.uri())).unwrap();

        let result = client.search(3).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_search_custom_approved_statuses() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/MLA/search"))
            .respond_with(ResponseTemplate::new(203).set_body_string(page_body(&["MLA9"])))
            .mount(&mock_server)
            .await;

        let mut config = make_test_config();
        config.approved_statuses = vec![200, 203];
        let client =
            MeliClient::with_base_url(&config, Site::Mla, Some(mock_server.uri())).unwrap();

        let page = client.search(0).await.unwrap().unwrap();
        assert_eq!(page.results[0].id, "MLA9");
    }

    #[tokio::test]
    async fn test_search_malformed_body_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/MLA/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let config = make_test_config();
        let client =
            MeliClient::with_base_url(&config, Site::Mla, Some(mock_server.uri())).unwrap();

        let result = client.search(0).await;
        assert!(matches!(result, Err(MeliError::Decode(_))));
    }

    #[tokio::test]
    async fn test_search_missing_results_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sites/MLA/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"error":"bad query"}"#))
            .mount(&mock_server)
            .await;

        let config = make_test_config();
        let client =
            MeliClient::with_base_url(&config, Site::Mla, Some(mock_server.uri())).unwrap();

        let result = client.search(0).await;
        assert!(matches!(result, Err(MeliError::Decode(_))));
    }

    #[tokio::test]
    async fn test_site_returned() {
        let config = make_test_config();
        let client = MeliClient::new(&config, Site::Mlm).unwrap();
        assert_eq!(client.site(), Site::Mlm);
    }

    #[test]
    fn test_base_url_default() {
        let config = make_test_config();
        let client = MeliClient::new(&config, Site::Mla).unwrap();
        assert_eq!(client.base_url(), "https://api.mercadolibre.com");
    }

    #[test]
    fn test_base_url_custom() {
        let config = make_test_config();
        let client =
            MeliClient::with_base_url(&config, Site::Mla, Some("http://custom.url".to_string()))
                .unwrap();
        assert_eq!(client.base_url(), "http://custom.url");
    }
}
