use super::{HttpClient, HttpClientError};
use crate::{request::Request, response::Response};
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use tokio::sync::Mutex;
use url::Url;

/// A client returning canned results in order and recording requests.
#[derive(Debug)]
pub struct StubHttpClient {
    results: Mutex<Vec<Result<Response, HttpClientError>>>,
    requests: Mutex<Vec<Request>>,
}

impl StubHttpClient {
    pub fn new(mut results: Vec<Result<Response, HttpClientError>>) -> Self {
        results.reverse();

        Self {
            results: results.into(),
            requests: Default::default(),
        }
    }

    pub async fn requests(&self) -> Vec<Request> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl HttpClient for StubHttpClient {
    async fn get(&self, request: &Request) -> Result<Response, HttpClientError> {
        self.requests.lock().await.push(request.clone());

        self.results.lock().await.pop().expect("stub response")
    }
}

pub fn build_stub_response(
    url: &str,
    status: StatusCode,
    body: &str,
) -> Result<Response, HttpClientError> {
    Ok(Response::new(
        Url::parse(url).unwrap(),
        status,
        HeaderMap::new(),
        body.as_bytes().to_vec(),
    ))
}
