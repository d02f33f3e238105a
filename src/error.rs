use crate::http_client::HttpClientError;
use core::{
    error,
    fmt::{self, Display, Formatter},
};

/// An error.
#[derive(Debug)]
pub enum Error {
    /// A transport failure.
    Http(HttpClientError),
    /// A malformed JSON response body.
    Json(serde_json::Error),
    /// An endpoint not forming a valid URL.
    UrlParse(url::ParseError),
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Http(error) => Some(error),
            Self::Json(error) => Some(error),
            Self::UrlParse(error) => Some(error),
        }
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(error) => write!(formatter, "http request failed: {error}"),
            Self::Json(error) => write!(formatter, "invalid json response: {error}"),
            Self::UrlParse(error) => write!(formatter, "invalid endpoint: {error}"),
        }
    }
}

impl From<HttpClientError> for Error {
    fn from(error: HttpClientError) -> Self {
        Self::Http(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Self::UrlParse(error)
    }
}
