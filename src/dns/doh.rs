use async_trait::async_trait;
use reqwest::{Client, Request, header::ACCEPT};
use serde::Deserialize;

use super::{DnsLookup, DnsRecord, LookupError, RecordType};

const DNS_JSON: &str = "application/dns-json";

/// JSON DNS-over-HTTPS client (`?name=<domain>&type=<MX|A|TXT>`).
#[derive(Debug, Clone)]
pub struct DohResolver {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Answer", default)]
    answer: Option<Vec<DnsRecord>>,
}

impl DohResolver {
    pub const DEFAULT_ENDPOINT: &'static str = "https://cloudflare-dns.com/dns-query";

    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn request_for(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Request, LookupError> {
        self.client
            .get(&self.endpoint)
            .header(ACCEPT, DNS_JSON)
            .query(&[("name", name), ("type", record_type.as_str())])
            .build()
            .map_err(|err| LookupError::http(&self.endpoint, err))
    }
}

#[async_trait]
impl DnsLookup for DohResolver {
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, LookupError> {
        let request = self.request_for(name, record_type)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| LookupError::http(&self.endpoint, err))?;
        let body = response
            .text()
            .await
            .map_err(|err| LookupError::http(&self.endpoint, err))?;
        parse_answer(name, &body)
    }
}

/// Extract the `Answer` section. A missing or null section means no records.
pub(crate) fn parse_answer(name: &str, body: &str) -> Result<Vec<DnsRecord>, LookupError> {
    let parsed: DohResponse =
        serde_json::from_str(body).map_err(|err| LookupError::decode(name, err))?;
    Ok(parsed.answer.unwrap_or_default())
}
