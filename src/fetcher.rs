use crate::{error::Error, http_client::HttpClient, request::Request};
use alloc::sync::Arc;
use http::{HeaderMap, HeaderValue, header::CONTENT_TYPE};
use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::Url;

/// A base URL of the Bored API.
pub const BASE_URL: &str = "https://www.boredapi.com/api/";

const JSON_CONTENT_TYPE: &str = "application/json";

/// A fetcher of JSON data from an API endpoint.
///
/// Each [`call`](Self::call) sends one GET request to [`BASE_URL`] joined
/// with the endpoint and keeps the parsed response body.
pub struct Fetcher {
    client: Arc<dyn HttpClient>,
    endpoint: String,
    data: Option<Map<String, Value>>,
}

impl Fetcher {
    /// Creates a fetcher for an endpoint.
    ///
    /// No request is sent until [`call`](Self::call) is invoked.
    pub fn new(client: Arc<dyn HttpClient>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            data: None,
        }
    }

    /// Returns an endpoint.
    #[allow(clippy::missing_const_for_fn)]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns a full request URL.
    pub fn url(&self) -> Result<Url, Error> {
        build_url(&self.endpoint)
    }

    /// Returns data fetched by the last successful call.
    pub const fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    /// Deserializes data fetched by the last successful call.
    pub fn data_as<T: DeserializeOwned>(&self) -> Option<Result<T, Error>> {
        self.data
            .as_ref()
            .map(|data| Ok(serde_json::from_value(Value::Object(data.clone()))?))
    }

    /// Fetches data from the endpoint and stores it.
    ///
    /// On failure, previously stored data is kept as it is.
    pub async fn call(&mut self) -> Result<(), Error> {
        let data = self.fetch(&self.endpoint).await?;

        self.data = Some(data);

        Ok(())
    }

    /// Fetches data from an arbitrary endpoint without storing it.
    pub async fn fetch(&self, endpoint: &str) -> Result<Map<String, Value>, Error> {
        let url = build_url(endpoint)?;

        debug!("fetching {url}");

        let response = self.client.get(&Request::new(url, json_headers())).await?;

        trace!("got {} response from {}", response.status(), response.url());

        Ok(serde_json::from_slice(response.body())?)
    }
}

fn build_url(endpoint: &str) -> Result<Url, Error> {
    Ok(Url::parse(&format!("{BASE_URL}{endpoint}"))?)
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers
}
