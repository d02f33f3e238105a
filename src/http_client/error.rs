use alloc::sync::Arc;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// A transport error.
///
/// It keeps the original error object so that callers can inspect it through
/// [`Error::source`].
#[derive(Clone, Debug)]
pub struct HttpClientError(Arc<dyn Error + Send + Sync>);

impl HttpClientError {
    /// Creates a transport error from its cause.
    pub fn new(error: impl Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(error))
    }
}

impl Error for HttpClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.0.as_ref())
    }
}

impl Display for HttpClientError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
