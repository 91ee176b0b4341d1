//! Identity verification interface.

use async_trait::async_trait;

use super::entity::Subject;
use super::error::AuthError;

/// Resolves an opaque bearer credential to a verified subject.
///
/// Identity issuance itself is an external concern; the core only needs
/// verification. Called exactly once per connection attempt by the
/// connection gate, and once per authenticated REST request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> Result<Subject, AuthError>;
}
