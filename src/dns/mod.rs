//! Domain resolution over DNS-over-HTTPS.
//!
//! The public entry point is [`resolve_domain`], which queries MX, A and TXT
//! records through any [`DnsLookup`] backend and condenses them into a
//! [`DomainReport`]. Lookup failures never escape: they select
//! [`DomainReport::fail_open`].

mod doh;
mod error;
mod resolver;
#[cfg(feature = "with-system-dns")]
mod system;
mod types;

pub use doh::DohResolver;
pub use error::LookupError;
pub use resolver::{DnsLookup, resolve_domain};
#[cfg(feature = "with-system-dns")]
pub use system::SystemResolver;
pub use types::{DnsRecord, DomainReport, RecordType};

#[cfg(test)]
pub(crate) mod tests;
