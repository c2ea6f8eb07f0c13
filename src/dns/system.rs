use std::time::Instant;

use async_trait::async_trait;
use trust_dns_resolver::{
    TokioAsyncResolver,
    error::{ResolveError, ResolveErrorKind},
    lookup::TxtLookup,
};

use super::{DnsLookup, DnsRecord, LookupError, RecordType};

/// [`DnsLookup`] backed by the operating system's resolver configuration.
pub struct SystemResolver {
    inner: TokioAsyncResolver,
}

impl SystemResolver {
    pub fn from_system_conf() -> Result<Self, LookupError> {
        let inner =
            TokioAsyncResolver::tokio_from_system_conf().map_err(LookupError::resolver_init)?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl DnsLookup for SystemResolver {
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, LookupError> {
        match record_type {
            RecordType::Mx => match self.inner.mx_lookup(name).await {
                Ok(lookup) => {
                    let ttl = remaining_ttl(lookup.valid_until());
                    Ok(lookup
                        .iter()
                        .map(|mx| {
                            let data = format!("{} {}", mx.preference(), mx.exchange());
                            DnsRecord::new(name, RecordType::Mx, ttl, data)
                        })
                        .collect())
                }
                Err(err) => empty_on_missing(name, record_type, err),
            },
            RecordType::A => match self.inner.ipv4_lookup(name).await {
                Ok(lookup) => {
                    let ttl = remaining_ttl(lookup.valid_until());
                    Ok(lookup
                        .iter()
                        .map(|addr| DnsRecord::new(name, RecordType::A, ttl, addr.to_string()))
                        .collect())
                }
                Err(err) => empty_on_missing(name, record_type, err),
            },
            RecordType::Txt => match self.inner.txt_lookup(name).await {
                Ok(lookup) => collect_txt_records(name, &lookup),
                Err(err) => empty_on_missing(name, record_type, err),
            },
        }
    }
}

fn collect_txt_records(name: &str, lookup: &TxtLookup) -> Result<Vec<DnsRecord>, LookupError> {
    let ttl = remaining_ttl(lookup.valid_until());
    let mut records = Vec::new();
    for txt in lookup.iter() {
        let mut data = String::new();
        for piece in txt.txt_data().iter() {
            let segment = std::str::from_utf8(piece.as_ref())
                .map_err(|err| LookupError::txt_data_utf8(name, err))?;
            data.push_str(segment);
        }
        records.push(DnsRecord::new(name, RecordType::Txt, ttl, data));
    }
    Ok(records)
}

// NXDOMAIN and NODATA both surface as NoRecordsFound.
fn empty_on_missing(
    name: &str,
    record_type: RecordType,
    err: ResolveError,
) -> Result<Vec<DnsRecord>, LookupError> {
    if matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
        Ok(Vec::new())
    } else {
        Err(LookupError::resolve(name, record_type, err))
    }
}

fn remaining_ttl(valid_until: Instant) -> u32 {
    let secs = valid_until
        .saturating_duration_since(Instant::now())
        .as_secs();
    u32::try_from(secs).unwrap_or(u32::MAX)
}
