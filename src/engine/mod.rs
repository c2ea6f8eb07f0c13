//! The validation pipeline.
//!
//! [`ValidationEngine::validate_deep`] runs, in order: syntax, domain
//! resolution, social presence, then the heuristic classifier. Each stage can
//! end the run early. The call always yields an [`EmailRecord`]; transport
//! failures are absorbed by the resolver and the social checker.

mod error;
mod options;

pub use error::EngineError;
pub use options::EngineOptions;

use reqwest::{Client, redirect::Policy};

use crate::dns::{DnsLookup, DohResolver, resolve_domain};
use crate::heuristics::classify;
use crate::record::{Checks, EmailRecord, EmailStatus, Verdict};
use crate::social::{AvatarProbe, GravatarProbe, check_social_presence};
use crate::validator::{EmailAddress, normalize_email};

pub const MISSING_DOMAIN_REASON: &str = "Domain does not exist";

/// Stateless pipeline over a DNS backend and an avatar backend. Safe to share
/// across tasks; invocations are independent.
pub struct ValidationEngine<D = DohResolver, A = GravatarProbe> {
    dns: D,
    avatar: A,
}

impl ValidationEngine {
    /// DNS-over-HTTPS and avatar backends with default endpoints.
    pub fn new() -> Result<Self, EngineError> {
        Self::with_options(&EngineOptions::default())
    }

    pub fn with_options(options: &EngineOptions) -> Result<Self, EngineError> {
        let client = build_http_client(options)?;
        Ok(Self::with_backends(
            DohResolver::new(client.clone(), options.doh_endpoint.clone()),
            GravatarProbe::new(client, options.avatar_endpoint.clone()),
        ))
    }
}

impl<D, A> ValidationEngine<D, A>
where
    D: DnsLookup,
    A: AvatarProbe,
{
    pub fn with_backends(dns: D, avatar: A) -> Self {
        Self { dns, avatar }
    }

    /// Classify one candidate address. Never fails.
    pub async fn validate_deep(&self, email: &str) -> EmailRecord {
        let normalized = normalize_email(email);
        let address = match EmailAddress::parse(&normalized) {
            Ok(address) => address,
            Err(err) => {
                #[cfg(feature = "with-tracing")]
                tracing::debug!(email = %normalized, reason = %err, "syntax rejected");
                let verdict = Verdict::new(EmailStatus::Bad, err.to_string(), 0.0, Checks::unrun());
                return EmailRecord::new(normalized, verdict);
            }
        };

        let report = resolve_domain(&self.dns, address.domain()).await;
        if !report.exists {
            #[cfg(feature = "with-tracing")]
            tracing::debug!(domain = address.domain(), "no MX or A records");
            let verdict = Verdict::new(
                EmailStatus::Bad,
                MISSING_DOMAIN_REASON,
                0.0,
                Checks::from_dns(&report),
            );
            return EmailRecord::new(address.as_str(), verdict);
        }

        let social = check_social_presence(&self.avatar, address.as_str()).await;
        let verdict = classify(&address, &report, social);
        #[cfg(feature = "with-tracing")]
        tracing::debug!(
            email = %address,
            status = %verdict.status,
            confidence = verdict.confidence,
            reason = %verdict.reason,
            "classified"
        );
        EmailRecord::new(address.as_str(), verdict)
    }
}

/// Shared client for both HTTP backends. Redirects are not followed, so an
/// avatar redirect reads as "not found".
pub fn build_http_client(options: &EngineOptions) -> Result<Client, EngineError> {
    let mut builder = Client::builder()
        .user_agent(options.user_agent.clone())
        .redirect(Policy::none());
    if let Some(timeout) = options.timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(EngineError::http_client)
}
