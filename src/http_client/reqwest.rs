use super::{HttpClient, HttpClientError};
use crate::{request::Request, response::Response};
use async_trait::async_trait;
use log::trace;
use reqwest::{Client, ClientBuilder};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// An HTTP client based on [`reqwest`].
#[derive(Debug)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates an HTTP client.
    pub fn new() -> Result<Self, HttpClientError> {
        Ok(Self {
            client: ClientBuilder::new().user_agent(USER_AGENT).build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, request: &Request) -> Result<Response, HttpClientError> {
        trace!("sending a request to {}", request.url());

        let response = self
            .client
            .get(request.url().clone())
            .headers(request.headers().clone())
            .send()
            .await?;

        trace!("got {} response from {}", response.status(), request.url());

        Ok(Response::new(
            response.url().clone(),
            response.status(),
            response.headers().clone(),
            response.bytes().await?.to_vec(),
        ))
    }
}

impl From<reqwest::Error> for HttpClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error)
    }
}
