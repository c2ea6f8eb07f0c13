use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{
    DnsLookup, DnsRecord, DomainReport, LookupError, RecordType, doh, resolve_domain, resolver,
};

type QueryResult = Result<Vec<DnsRecord>, LookupError>;
type QueryFn = dyn Fn(&str, RecordType) -> QueryResult + Send + Sync;

/// Scripted [`DnsLookup`] that also counts the queries it receives.
pub(crate) struct StubLookup {
    on_query: Box<QueryFn>,
    calls: AtomicUsize,
}

impl StubLookup {
    pub(crate) fn new<F>(f: F) -> Self
    where
        F: Fn(&str, RecordType) -> QueryResult + Send + Sync + 'static,
    {
        Self {
            on_query: Box::new(f),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fixed answers per record type; unknown types answer empty.
    pub(crate) fn with_answers(answers: HashMap<RecordType, Vec<DnsRecord>>) -> Self {
        Self::new(move |_, record_type| Ok(answers.get(&record_type).cloned().unwrap_or_default()))
    }

    /// A domain with one MX and one A record and a harmless TXT record.
    pub(crate) fn healthy() -> Self {
        let mut answers = HashMap::new();
        answers.insert(RecordType::Mx, vec![mx_record("mx1.example.com.")]);
        answers.insert(RecordType::A, vec![a_record("192.0.2.10")]);
        answers.insert(RecordType::Txt, vec![txt_record("v=spf1 -all")]);
        Self::with_answers(answers)
    }

    pub(crate) fn failing() -> Self {
        Self::new(|name, _| Err(decode_error(name)))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsLookup for StubLookup {
    async fn query(&self, name: &str, record_type: RecordType) -> QueryResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.on_query)(name, record_type)
    }
}

pub(crate) fn mx_record(exchange: &str) -> DnsRecord {
    DnsRecord::new("example.com", RecordType::Mx, 300, format!("10 {exchange}"))
}

pub(crate) fn a_record(addr: &str) -> DnsRecord {
    DnsRecord::new("example.com", RecordType::A, 300, addr)
}

pub(crate) fn txt_record(text: &str) -> DnsRecord {
    DnsRecord::new("example.com", RecordType::Txt, 300, format!("\"{text}\""))
}

pub(crate) fn decode_error(name: &str) -> LookupError {
    let source = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated JSON");
    LookupError::decode(name, source)
}

#[test]
fn record_type_codes() {
    assert_eq!(RecordType::A.code(), 1);
    assert_eq!(RecordType::Mx.code(), 15);
    assert_eq!(RecordType::Txt.code(), 16);
    assert_eq!(RecordType::Mx.to_string(), "MX");
}

#[tokio::test]
async fn mx_and_a_mean_reachable() {
    let stub = StubLookup::healthy();
    let report = resolve_domain(&stub, "example.com").await;
    assert_eq!(
        report,
        DomainReport {
            exists: true,
            has_mx: true,
            is_blacklisted: false,
        }
    );
    assert_eq!(stub.calls(), 3);
}

#[tokio::test]
async fn a_record_alone_still_exists() {
    let mut answers = HashMap::new();
    answers.insert(RecordType::A, vec![a_record("192.0.2.1")]);
    let stub = StubLookup::with_answers(answers);

    let report = resolve_domain(&stub, "example.com").await;
    assert!(report.exists);
    assert!(!report.has_mx);
}

#[tokio::test]
async fn no_records_means_missing_domain() {
    let stub = StubLookup::with_answers(HashMap::new());
    let report = resolve_domain(&stub, "nowhere.invalid").await;
    assert!(!report.exists);
    assert!(!report.has_mx);
    assert!(!report.is_blacklisted);
}

#[tokio::test]
async fn only_typed_answers_count() {
    // A CNAME (type 5) in the MX answer is not an MX record.
    let stub = StubLookup::new(|name, record_type| match record_type {
        RecordType::Mx => Ok(vec![DnsRecord {
            name: name.to_string(),
            record_type: 5,
            ttl: 60,
            data: "alias.example.net.".to_string(),
        }]),
        _ => Ok(Vec::new()),
    });
    let report = resolve_domain(&stub, "example.com").await;
    assert!(!report.has_mx);
    assert!(!report.exists);
}

#[tokio::test]
async fn txt_block_marker_is_case_insensitive() {
    let mut answers = HashMap::new();
    answers.insert(RecordType::Mx, vec![mx_record("mx.example.com.")]);
    answers.insert(RecordType::Txt, vec![txt_record("Domain BLOCKED by registry")]);
    let stub = StubLookup::with_answers(answers);

    let report = resolve_domain(&stub, "example.com").await;
    assert!(report.is_blacklisted);
    assert!(report.exists);
}

#[tokio::test]
async fn queries_target_the_given_domain() {
    let stub = StubLookup::new(|name, _| {
        assert_eq!(name, "example.org");
        Ok(Vec::new())
    });
    resolve_domain(&stub, "example.org").await;
    assert_eq!(stub.calls(), 3);
}

#[tokio::test]
async fn any_failure_fails_open() {
    let stub = StubLookup::new(|name, record_type| match record_type {
        RecordType::Txt => Err(decode_error(name)),
        RecordType::Mx => Ok(Vec::new()),
        RecordType::A => Ok(Vec::new()),
    });
    let report = resolve_domain(&stub, "example.com").await;
    assert_eq!(report, DomainReport::fail_open());

    let err = resolver::resolve_with(&stub, "example.com")
        .await
        .expect_err("TXT failure propagates internally");
    assert!(matches!(err, LookupError::Decode { .. }));
}

#[tokio::test]
async fn boxed_backend_delegates() {
    let boxed: Box<dyn DnsLookup> = Box::new(StubLookup::healthy());
    let report = resolve_domain(&boxed, "example.com").await;
    assert!(report.has_mx);
}

#[test]
fn txt_scan_ignores_empty_answer() {
    assert!(!resolver::txt_signals_block(&[]).expect("serializes"));
    let records = vec![txt_record("google-site-verification=abc")];
    assert!(!resolver::txt_signals_block(&records).expect("serializes"));
}

#[test]
fn parse_cloudflare_answer() {
    let body = r#"{
        "Status": 0, "TC": false, "RD": true, "RA": true, "AD": false, "CD": false,
        "Question": [{"name": "example.com", "type": 15}],
        "Answer": [
            {"name": "example.com", "type": 15, "TTL": 1726, "data": "10 mx1.example.com."},
            {"name": "example.com", "type": 15, "TTL": 1726, "data": "20 mx2.example.com."}
        ]
    }"#;
    let records = doh::parse_answer("example.com", body).expect("valid body");
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.is(RecordType::Mx)));
    assert_eq!(records[0].ttl, 1726);
    assert_eq!(records[1].data, "20 mx2.example.com.");
}

#[test]
fn parse_answer_without_section() {
    let body = r#"{"Status": 3, "Question": [{"name": "nope.invalid", "type": 1}]}"#;
    assert!(doh::parse_answer("nope.invalid", body).expect("valid body").is_empty());

    let body = r#"{"Status": 0, "Answer": null}"#;
    assert!(doh::parse_answer("example.com", body).expect("valid body").is_empty());
}

#[test]
fn parse_answer_rejects_garbage() {
    let err = doh::parse_answer("example.com", "<html>rate limited</html>")
        .expect_err("not JSON");
    assert!(matches!(err, LookupError::Decode { ref name, .. } if name == "example.com"));
}

#[test]
fn doh_request_carries_name_type_and_accept() {
    let resolver = doh::DohResolver::new(reqwest::Client::new(), doh::DohResolver::DEFAULT_ENDPOINT);
    let request = resolver
        .request_for("example.com", RecordType::Txt)
        .expect("request builds");

    assert_eq!(request.method(), reqwest::Method::GET);
    assert_eq!(
        request.url().as_str(),
        "https://cloudflare-dns.com/dns-query?name=example.com&type=TXT"
    );
    let accept = request
        .headers()
        .get(reqwest::header::ACCEPT)
        .expect("accept header");
    assert_eq!(accept, "application/dns-json");
}
