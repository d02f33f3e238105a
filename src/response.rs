use http::{HeaderMap, StatusCode};
use url::Url;

/// An HTTP response.
#[derive(Clone, Debug)]
pub struct Response {
    url: Url,
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Creates a response.
    pub const fn new(url: Url, status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            url,
            status,
            headers,
            body,
        }
    }

    /// Returns a final URL after redirects.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns a status code.
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a body.
    #[allow(clippy::missing_const_for_fn)]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
