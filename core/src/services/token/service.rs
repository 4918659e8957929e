//! Stateless JWT issuance and validation.
//!
//! Tokens are signed with a symmetric HS256 secret owned by this service,
//! derived once at startup. There is no revocation: a token stops validating
//! the second its `exp` claim passes, and not before.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service issuing and validating signed bearer tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from its configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        // Second-granularity expiry with an exact boundary: a token is dead
        // at exp, not exp plus the crate's default 60s grace.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token for an already-verified identity
    ///
    /// Expiry is `now + token_ttl_minutes`. Deterministic given the identity
    /// and the clock; does not fail for any valid identity (encoding errors
    /// indicate a broken signing key and surface as internal errors).
    pub fn issue(&self, username: &str) -> DomainResult<String> {
        let claims = Claims::new(username, self.config.token_ttl_minutes);
        self.encode(&claims)
    }

    /// Validates a token and recovers its claims
    ///
    /// The signature check happens before any embedded field is trusted:
    /// `jsonwebtoken::decode` verifies the MAC over the exact bytes presented
    /// and only then deserializes the claims. Tampered or unparseable tokens
    /// fail as `Malformed`; a genuine token past its expiry fails as
    /// `Expired`.
    pub fn validate(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                DomainError::Token(TokenError::Expired)
            } else {
                DomainError::Token(TokenError::Malformed)
            }
        })?;

        // jsonwebtoken only rejects `exp < now`, which leaves the token alive
        // for the second where `exp == now`; the contract is dead at exp.
        if data.claims.is_expired() {
            return Err(DomainError::Token(TokenError::Expired));
        }

        Ok(data.claims)
    }

    /// Token lifetime in seconds, for login responses
    pub fn ttl_seconds(&self) -> i64 {
        self.config.token_ttl_minutes * 60
    }

    pub(crate) fn encode(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("token encoding failed: {e}"),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn service() -> TokenService {
        TokenService::new(TokenServiceConfig {
            jwt_secret: "unit-test-secret".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_issue_then_validate_recovers_identity() {
        let tokens = service();
        let token = tokens.issue("alice").unwrap();

        let claims = tokens.validate(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_expired_token_fails_with_expired() {
        let tokens = service();
        let mut claims = Claims::new("alice", 30);
        claims.iat = Utc::now().timestamp() - 3600;
        claims.exp = Utc::now().timestamp() - 1;
        let token = tokens.encode(&claims).unwrap();

        let err = tokens.validate(&token).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::Expired)));
    }

    #[test]
    fn test_token_dead_at_exact_expiry_second() {
        let tokens = service();
        let mut claims = Claims::new("alice", 30);
        // exp equal to the current second is already expired, not still valid
        claims.exp = Utc::now().timestamp();
        let token = tokens.encode(&claims).unwrap();

        let err = tokens.validate(&token).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::Expired)));
    }

    #[test]
    fn test_token_valid_right_up_to_expiry() {
        let tokens = service();
        let mut claims = Claims::new("alice", 30);
        // Two seconds of validity left; must still validate
        claims.exp = Utc::now().timestamp() + 2;
        let token = tokens.encode(&claims).unwrap();

        assert!(tokens.validate(&token).is_ok());
    }

    #[test]
    fn test_tampered_signature_fails_with_malformed() {
        let tokens = service();
        let token = tokens.issue("alice").unwrap();

        // Flip one character of the signature segment
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });
        assert_ne!(token, tampered);

        let err = tokens.validate(&tampered).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::Malformed)));
    }

    #[test]
    fn test_tampered_payload_fails_with_malformed() {
        let tokens = service();
        let token = tokens.issue("alice").unwrap();

        // Swap the payload for one claiming to be someone else; the original
        // signature no longer matches, so the embedded identity must not be
        // trusted.
        let forged_claims = Claims::new("mallory", 30);
        let forged = tokens.encode(&forged_claims).unwrap();
        let signature = token.rsplit('.').next().unwrap();
        let forged_body: Vec<&str> = forged.split('.').collect();
        let spliced = format!("{}.{}.{}", forged_body[0], forged_body[1], signature);

        let err = tokens.validate(&spliced).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::Malformed)));
    }

    #[test]
    fn test_garbage_fails_with_malformed() {
        let tokens = service();
        for garbage in ["", "not-a-jwt", "a.b.c"] {
            let err = tokens.validate(garbage).unwrap_err();
            assert!(matches!(err, DomainError::Token(TokenError::Malformed)));
        }
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let tokens = service();
        let other = TokenService::new(TokenServiceConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..Default::default()
        });

        let token = other.issue("alice").unwrap();
        let err = tokens.validate(&token).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::Malformed)));
    }
}
