use http::HeaderMap;
use url::Url;

/// An HTTP request.
#[derive(Clone, Debug)]
pub struct Request {
    url: Url,
    headers: HeaderMap,
}

impl Request {
    /// Creates a request.
    pub const fn new(url: Url, headers: HeaderMap) -> Self {
        Self { url, headers }
    }

    /// Returns a URL.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
