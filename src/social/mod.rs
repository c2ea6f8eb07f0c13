//! Avatar-presence probe. A public avatar for the address is taken as proof
//! that a real person uses it.

mod gravatar;

use std::sync::Arc;

use async_trait::async_trait;

use crate::digest::md5_hex;
use crate::dns::LookupError;
use crate::validator::normalize_email;

pub use gravatar::GravatarProbe;

const FOUND: u16 = 200;

/// Existence probe against an avatar service keyed by [`avatar_hash`].
#[async_trait]
pub trait AvatarProbe: Send + Sync {
    /// HTTP status returned for `hash`.
    async fn probe(&self, hash: &str) -> Result<u16, LookupError>;
}

#[async_trait]
impl<T: AvatarProbe + ?Sized> AvatarProbe for Box<T> {
    async fn probe(&self, hash: &str) -> Result<u16, LookupError> {
        (**self).probe(hash).await
    }
}

#[async_trait]
impl<T: AvatarProbe + ?Sized> AvatarProbe for Arc<T> {
    async fn probe(&self, hash: &str) -> Result<u16, LookupError> {
        (**self).probe(hash).await
    }
}

/// Hex MD5 of the normalized address.
pub fn avatar_hash(email: &str) -> String {
    md5_hex(&normalize_email(email))
}

/// `true` only when the service answers 200. Errors and every other status
/// count as absent.
pub async fn check_social_presence<P>(probe: &P, email: &str) -> bool
where
    P: AvatarProbe + ?Sized,
{
    matches!(probe.probe(&avatar_hash(email)).await, Ok(FOUND))
}
