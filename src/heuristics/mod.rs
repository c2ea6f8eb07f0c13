//! Rule-based classification of an address that passed syntax and DNS.
//!
//! [`classify`] walks an ordered chain of guards. Each guard either settles
//! the verdict or lets the next one run:
//!
//! 1. social presence        → GOOD 1.0
//! 2. disposable domain      → BAD 0.1
//! 3. role account           → RISKY 0.4
//! 4. penalty score          (computed, not yet returned)
//! 5. one-edit provider typo → RISKY 0.3, overriding the score
//! 6. score thresholds       → GOOD / RISKY / BAD

mod metrics;
mod reference;

pub use metrics::shannon_entropy;
pub use reference::{
    DISPOSABLE_DOMAINS, HIGH_RISK_TLDS, MAJOR_PROVIDERS, ROLE_ACCOUNTS, is_disposable,
    is_high_risk_tld, is_role_account,
};

use crate::dns::DomainReport;
use crate::record::{Checks, EmailStatus, Verdict};
use crate::validator::{EmailAddress, code_units};

pub const VALID_REASON: &str = "Valid and deliverable";

const NO_MX_PENALTY: f64 = 0.5;
const BLACKLIST_PENALTY: f64 = 0.6;
const RISKY_TLD_PENALTY: f64 = 0.3;
const ROBOTIC_PENALTY: f64 = 0.4;

const ROBOTIC_ENTROPY: f64 = 4.5;
const ROBOTIC_MIN_LEN: usize = 10;

const GOOD_ABOVE: f64 = 0.8;
const RISKY_ABOVE: f64 = 0.4;

/// Classify `address` given its DNS report and social-probe result.
pub fn classify(address: &EmailAddress, dns: &DomainReport, social: bool) -> Verdict {
    let checks = Checks {
        social,
        ..Checks::from_dns(dns)
    };

    if let Some(verdict) = social_guard(social, checks) {
        return verdict;
    }
    if let Some(verdict) = disposable_guard(address, checks) {
        return verdict;
    }
    if let Some(verdict) = role_guard(address, checks) {
        return verdict;
    }
    let score = Score::accumulate(address, dns);
    if let Some(verdict) = typo_guard(address, checks) {
        return verdict;
    }
    score.into_verdict(checks)
}

fn social_guard(social: bool, checks: Checks) -> Option<Verdict> {
    social.then(|| {
        let checks = Checks {
            social: true,
            disposable: true,
            role: true,
            ..checks
        };
        Verdict::new(EmailStatus::Good, "Verified via Social Profile", 1.0, checks)
    })
}

fn disposable_guard(address: &EmailAddress, checks: Checks) -> Option<Verdict> {
    is_disposable(address.domain()).then(|| {
        let checks = Checks {
            disposable: false,
            ..checks
        };
        Verdict::new(EmailStatus::Bad, "Disposable email detected", 0.1, checks)
    })
}

fn role_guard(address: &EmailAddress, checks: Checks) -> Option<Verdict> {
    is_role_account(address.local()).then(|| {
        let checks = Checks {
            role: false,
            ..checks
        };
        Verdict::new(
            EmailStatus::Risky,
            "Role-based email (Risky for outreach)",
            0.4,
            checks,
        )
    })
}

fn typo_guard(address: &EmailAddress, checks: Checks) -> Option<Verdict> {
    typo_of(address.domain()).map(|provider| {
        Verdict::new(
            EmailStatus::Risky,
            format!("Possible typo of @{provider}"),
            0.3,
            checks,
        )
    })
}

/// First major provider exactly one edit away from `domain`.
pub fn typo_of(domain: &str) -> Option<&'static str> {
    MAJOR_PROVIDERS
        .iter()
        .copied()
        .find(|provider| domain != *provider && strsim::levenshtein(domain, provider) == 1)
}

/// `true` when the local part looks machine-generated.
pub fn is_robotic(local: &str) -> bool {
    shannon_entropy(local) > ROBOTIC_ENTROPY && code_units(local) > ROBOTIC_MIN_LEN
}

// Every penalty subtracts; the reason is the last one applied.
struct Score {
    value: f64,
    reason: &'static str,
}

impl Score {
    fn accumulate(address: &EmailAddress, dns: &DomainReport) -> Self {
        let mut score = Self {
            value: 1.0,
            reason: VALID_REASON,
        };
        if !dns.has_mx {
            score.penalize(NO_MX_PENALTY, "No MX records found");
        }
        if dns.is_blacklisted {
            score.penalize(BLACKLIST_PENALTY, "Domain is blacklisted");
        }
        if is_high_risk_tld(address.tld()) {
            score.penalize(RISKY_TLD_PENALTY, "High-risk TLD detected");
        }
        if is_robotic(address.local()) {
            score.penalize(ROBOTIC_PENALTY, "Possible robotic address");
        }
        score
    }

    fn penalize(&mut self, amount: f64, reason: &'static str) {
        self.value -= amount;
        self.reason = reason;
    }

    fn status(&self) -> EmailStatus {
        if self.value > GOOD_ABOVE {
            EmailStatus::Good
        } else if self.value > RISKY_ABOVE {
            EmailStatus::Risky
        } else {
            EmailStatus::Bad
        }
    }

    fn into_verdict(self, checks: Checks) -> Verdict {
        Verdict::new(self.status(), self.reason, self.value, checks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> EmailAddress {
        EmailAddress::parse(s).expect("valid syntax")
    }

    fn healthy() -> DomainReport {
        DomainReport {
            exists: true,
            has_mx: true,
            is_blacklisted: false,
        }
    }

    fn dns(has_mx: bool, is_blacklisted: bool) -> DomainReport {
        DomainReport {
            exists: true,
            has_mx,
            is_blacklisted,
        }
    }

    #[test]
    fn clean_address_is_good() {
        let v = classify(&addr("jane.doe@example.com"), &healthy(), false);
        assert_eq!(v.status, EmailStatus::Good);
        assert_eq!(v.reason, VALID_REASON);
        assert_eq!(v.confidence, 1.0);
        assert!(v.checks.syntax && v.checks.dns && v.checks.mx);
        assert!(v.checks.disposable && v.checks.role && v.checks.blacklist);
        assert!(!v.checks.social);
    }

    #[test]
    fn social_overrides_disposable_and_role() {
        let v = classify(&addr("admin@mailinator.com"), &dns(false, true), true);
        assert_eq!(v.status, EmailStatus::Good);
        assert_eq!(v.reason, "Verified via Social Profile");
        assert_eq!(v.confidence, 1.0);
        assert!(v.checks.social && v.checks.disposable && v.checks.role);
        assert!(!v.checks.blacklist);
    }

    #[test]
    fn disposable_precedes_scoring() {
        let v = classify(&addr("jane@mailinator.com"), &healthy(), false);
        assert_eq!(v.status, EmailStatus::Bad);
        assert_eq!(v.reason, "Disposable email detected");
        assert_eq!(v.confidence, 0.1);
        assert!(!v.checks.disposable);
        assert!(v.checks.role);
    }

    #[test]
    fn role_account_is_risky() {
        let v = classify(&addr("support@example.com"), &healthy(), false);
        assert_eq!(v.status, EmailStatus::Risky);
        assert_eq!(v.reason, "Role-based email (Risky for outreach)");
        assert_eq!(v.confidence, 0.4);
        assert!(!v.checks.role);
        assert!(v.checks.disposable);
    }

    #[test]
    fn role_precedes_typo() {
        let v = classify(&addr("admin@gnail.com"), &healthy(), false);
        assert_eq!(v.reason, "Role-based email (Risky for outreach)");
    }

    #[test]
    fn missing_mx_drops_to_risky() {
        let v = classify(&addr("jane@example.com"), &dns(false, false), false);
        assert_eq!(v.status, EmailStatus::Risky);
        assert_eq!(v.reason, "No MX records found");
        assert!((v.confidence - 0.5).abs() < 1e-9);
        assert!(!v.checks.mx);
    }

    #[test]
    fn high_risk_tld_penalty() {
        let v = classify(&addr("jane@shop.xyz"), &healthy(), false);
        assert_eq!(v.status, EmailStatus::Risky);
        assert_eq!(v.reason, "High-risk TLD detected");
        assert!((v.confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn last_penalty_names_the_reason() {
        let v = classify(&addr("jane@example.com"), &dns(false, true), false);
        assert_eq!(v.status, EmailStatus::Bad);
        assert_eq!(v.reason, "Domain is blacklisted");
        assert!(!v.checks.blacklist);
    }

    #[test]
    fn confidence_clamped_at_zero() {
        let v = classify(
            &addr("abcdefghijklmnopqrstuvwxyz@spam.top"),
            &dns(false, true),
            false,
        );
        assert_eq!(v.status, EmailStatus::Bad);
        assert_eq!(v.reason, "Possible robotic address");
        assert_eq!(v.confidence, 0.0);
    }

    #[test]
    fn distinct_eleven_chars_not_robotic() {
        assert!(!is_robotic("abcdefghijk"));
        let v = classify(&addr("abcdefghijk@example.com"), &healthy(), false);
        assert_eq!(v.status, EmailStatus::Good);
    }

    #[test]
    fn high_entropy_local_is_robotic() {
        assert!(is_robotic("q7x2mzk9vb4wlp0ts8nfhd3ryc"));
        let v = classify(
            &addr("q7x2mzk9vb4wlp0ts8nfhd3ryc@example.com"),
            &healthy(),
            false,
        );
        assert_eq!(v.status, EmailStatus::Risky);
        assert_eq!(v.reason, "Possible robotic address");
        assert!((v.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn short_local_never_robotic() {
        assert!(!is_robotic("abcdefghij"));
    }

    #[test]
    fn typo_overrides_penalties() {
        let v = classify(&addr("jane@gnail.com"), &dns(false, true), false);
        assert_eq!(v.status, EmailStatus::Risky);
        assert_eq!(v.reason, "Possible typo of @gmail.com");
        assert_eq!(v.confidence, 0.3);
        assert!(!v.checks.mx);
    }

    #[test]
    fn typo_detection_cases() {
        assert_eq!(typo_of("gmal.com"), Some("gmail.com"));
        assert_eq!(typo_of("yahooo.com"), Some("yahoo.com"));
        assert_eq!(typo_of("outlok.com"), Some("outlook.com"));
        assert_eq!(typo_of("gmail.com"), None);
        assert_eq!(typo_of("example.com"), None);
        assert_eq!(typo_of("gmial.com"), None);
    }

    #[test]
    fn first_provider_in_order_wins() {
        // One edit from both me.com and msn.com.
        assert_eq!(strsim::levenshtein("ms.com", "me.com"), 1);
        assert_eq!(strsim::levenshtein("ms.com", "msn.com"), 1);
        assert_eq!(typo_of("ms.com"), Some("me.com"));
    }

    #[test]
    fn distance_classics() {
        assert_eq!(strsim::levenshtein("kitten", "sitting"), 3);
        assert_eq!(strsim::levenshtein("", "abc"), 3);
        assert_eq!(strsim::levenshtein("gmail.com", "gmail.com"), 0);
    }

    #[test]
    fn distance_single_edits() {
        assert_eq!(strsim::levenshtein("gmal.com", "gmail.com"), 1);
        assert_eq!(strsim::levenshtein("gmaill.com", "gmail.com"), 1);
        assert_eq!(strsim::levenshtein("gnail.com", "gmail.com"), 1);
    }

    #[test]
    fn transposition_costs_two() {
        assert_eq!(strsim::levenshtein("gmial.com", "gmail.com"), 2);
        assert_eq!(typo_of("gmial.com"), None);
    }

    #[test]
    fn emoji_local_part_not_robotic() {
        let local: String = ('\u{1F600}'..='\u{1F616}').collect();
        assert!(!is_robotic(&local));
        let v = classify(&addr(&format!("{local}@example.com")), &healthy(), false);
        assert_eq!(v.status, EmailStatus::Good);
        assert_eq!(v.reason, VALID_REASON);
    }

    #[test]
    fn exact_provider_scores_normally() {
        let v = classify(&addr("jane@gmail.com"), &healthy(), false);
        assert_eq!(v.status, EmailStatus::Good);
        assert_eq!(v.reason, VALID_REASON);
    }
}
