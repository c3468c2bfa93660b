use crate::utils::error::Result;
use url::Url;

/// Status code and body of one HTTP exchange, read in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues a single GET. Implementations must not retry and must surface
/// connection failures as errors rather than as a response.
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url) -> impl std::future::Future<Output = Result<RawResponse>> + Send;
}
