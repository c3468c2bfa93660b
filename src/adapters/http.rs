use crate::domain::ports::{RawResponse, Transport};
use crate::utils::error::Result;
use reqwest::Client;
use url::Url;

/// `Transport` backed by a shared reqwest client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse> {
        // the url carries apiKey, keep it out of error messages
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| e.without_url())?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| e.without_url())?;

        tracing::debug!("Received HTTP {} ({} bytes)", status, body.len());

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
