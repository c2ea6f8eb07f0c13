use async_trait::async_trait;
use reqwest::{Client, Request};

use super::AvatarProbe;
use crate::dns::LookupError;

/// HEAD `<endpoint>/<hash>?d=404`. `d=404` turns off the default-image
/// fallback so an unknown hash does not answer 200.
#[derive(Debug, Clone)]
pub struct GravatarProbe {
    client: Client,
    endpoint: String,
}

impl GravatarProbe {
    pub const DEFAULT_ENDPOINT: &'static str = "https://www.gravatar.com/avatar";

    /// The client should not follow redirects: a redirect is not a hit.
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn url_for(&self, hash: &str) -> String {
        format!("{}/{hash}", self.endpoint.trim_end_matches('/'))
    }

    pub(crate) fn request_for(&self, hash: &str) -> Result<Request, LookupError> {
        let url = self.url_for(hash);
        self.client
            .head(&url)
            .query(&[("d", "404")])
            .build()
            .map_err(|err| LookupError::http(url, err))
    }
}

#[async_trait]
impl AvatarProbe for GravatarProbe {
    async fn probe(&self, hash: &str) -> Result<u16, LookupError> {
        let request = self.request_for(hash)?;
        let url = request.url().to_string();
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| LookupError::http(url, err))?;
        Ok(response.status().as_u16())
    }
}
