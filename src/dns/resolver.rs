use std::sync::Arc;

use async_trait::async_trait;

use super::{DnsRecord, DomainReport, LookupError, RecordType};

const BLOCK_MARKER: &str = "blocked";

/// Source of DNS answers for one name and record type.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Answer records for `name`. An empty vector means the name has no
    /// records of that type.
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, LookupError>;
}

#[async_trait]
impl<T: DnsLookup + ?Sized> DnsLookup for Box<T> {
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, LookupError> {
        (**self).query(name, record_type).await
    }
}

#[async_trait]
impl<T: DnsLookup + ?Sized> DnsLookup for Arc<T> {
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, LookupError> {
        (**self).query(name, record_type).await
    }
}

/// Resolve `domain` and derive its [`DomainReport`].
///
/// MX, A and TXT are queried concurrently. If any of them fails the whole
/// report falls back to [`DomainReport::fail_open`]; nothing is retried.
pub async fn resolve_domain<L>(lookup: &L, domain: &str) -> DomainReport
where
    L: DnsLookup + ?Sized,
{
    resolve_with(lookup, domain)
        .await
        .unwrap_or_else(|_| DomainReport::fail_open())
}

pub(crate) async fn resolve_with<L>(lookup: &L, domain: &str) -> Result<DomainReport, LookupError>
where
    L: DnsLookup + ?Sized,
{
    let (mx, a, txt) = tokio::join!(
        lookup.query(domain, RecordType::Mx),
        lookup.query(domain, RecordType::A),
        lookup.query(domain, RecordType::Txt),
    );
    let (mx, a, txt) = (mx?, a?, txt?);

    let has_mx = mx.iter().any(|record| record.is(RecordType::Mx));
    let has_a = a.iter().any(|record| record.is(RecordType::A));
    let is_blacklisted = txt_signals_block(&txt)?;

    Ok(DomainReport {
        exists: has_mx || has_a,
        has_mx,
        is_blacklisted,
    })
}

/// Scan the serialized TXT answer for the block marker, ignoring case.
pub(crate) fn txt_signals_block(records: &[DnsRecord]) -> Result<bool, LookupError> {
    if records.is_empty() {
        return Ok(false);
    }
    let serialized = serde_json::to_string(records).map_err(LookupError::serialize)?;
    Ok(serialized.to_lowercase().contains(BLOCK_MARKER))
}
