#![forbid(unsafe_code)]
//! mailsift_lib: deep e-mail address validation (syntax, DNS, avatar presence, heuristics)

pub mod digest;
pub mod dns;
pub mod engine;
pub mod heuristics;
pub mod record;
pub mod social;
pub mod validator;

pub use dns::{DnsLookup, DohResolver, DomainReport, LookupError, resolve_domain};
#[cfg(feature = "with-system-dns")]
pub use dns::SystemResolver;
pub use engine::{EngineError, EngineOptions, ValidationEngine};
pub use heuristics::classify;
pub use record::{Checks, EmailRecord, EmailStatus, ValidationSummary, Verdict};
pub use social::{AvatarProbe, GravatarProbe, check_social_presence};
pub use validator::{EmailAddress, SyntaxError, normalize_email, validate_syntax};
