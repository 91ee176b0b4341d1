//! HTTP token introspection verifier.
//!
//! Posts the opaque credential to an external identity provider and maps
//! the returned claims to a `Subject`. The provider is the source of
//! truth; this verifier never inspects the token itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{AuthError, IdentityVerifier, Subject};

#[derive(Debug, Serialize)]
struct IntrospectRequest<'a> {
    token: &'a str,
}

/// Claims returned by the identity provider. `uid` is accepted as an
/// alias for `id` to match common provider payloads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubjectClaims {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    uid: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

/// Verifier backed by an identity provider's introspection endpoint.
pub struct HttpIdentityVerifier {
    client: reqwest::Client,
    verify_url: String,
}

impl HttpIdentityVerifier {
    pub fn new(verify_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            verify_url,
        }
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    async fn verify(&self, credential: &str) -> Result<Subject, AuthError> {
        if credential.is_empty() {
            return Err(AuthError::MissingCredential);
        }

        let response = self
            .client
            .post(&self.verify_url)
            .json(&IntrospectRequest { token: credential })
            .send()
            .await
            .map_err(|e| AuthError::VerifierUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidCredential(format!(
                "identity provider returned {}",
                response.status()
            )));
        }

        let claims: SubjectClaims = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidCredential(e.to_string()))?;

        let id = claims
            .id
            .or(claims.uid)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AuthError::InvalidCredential("claims carry no subject id".to_string())
            })?;

        Ok(Subject::new(id, claims.email, claims.display_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_accept_uid_alias() {
        // given:
        let raw = r#"{"uid":"u1","email":"a@example.com"}"#;

        // when:
        let claims: SubjectClaims = serde_json::from_str(raw).unwrap();

        // then:
        assert_eq!(claims.id, None);
        assert_eq!(claims.uid.as_deref(), Some("u1"));
        assert_eq!(claims.email.as_deref(), Some("a@example.com"));
    }

    #[tokio::test]
    async fn test_empty_credential_is_rejected_without_network() {
        // given: an unroutable endpoint; the empty check must fire first
        let verifier = HttpIdentityVerifier::new("http://127.0.0.1:1/verify".to_string());

        // when:
        let result = verifier.verify("").await;

        // then:
        assert!(matches!(result, Err(AuthError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_maps_to_unavailable() {
        // given:
        let verifier = HttpIdentityVerifier::new("http://127.0.0.1:1/verify".to_string());

        // when:
        let result = verifier.verify("token").await;

        // then:
        assert!(matches!(result, Err(AuthError::VerifierUnavailable(_))));
    }
}
