//! Dev token verifier.
//!
//! Accepts tokens of the form `dev.<subject-id>` or
//! `dev.<subject-id>.<display-name>` and rejects everything else. Used
//! when no identity provider URL is configured; never meant for
//! production.

use async_trait::async_trait;

use crate::domain::{AuthError, IdentityVerifier, Subject};

pub struct DevTokenVerifier;

#[async_trait]
impl IdentityVerifier for DevTokenVerifier {
    async fn verify(&self, credential: &str) -> Result<Subject, AuthError> {
        if credential.is_empty() {
            return Err(AuthError::MissingCredential);
        }

        let mut parts = credential.splitn(3, '.');
        let prefix = parts.next().unwrap_or_default();
        let id = parts.next().unwrap_or_default();
        let name = parts.next();

        if prefix != "dev" || id.is_empty() {
            return Err(AuthError::InvalidCredential(
                "not a dev token".to_string(),
            ));
        }

        Ok(Subject::new(
            id.to_string(),
            None,
            name.filter(|n| !n.is_empty()).map(|n| n.to_string()),
        ))
    }
}
