//! Main gateway service implementation.
//!
//! Every protected call runs the same explicit pipeline:
//! validate token -> admit through the rate limiter -> check the payload
//! shape -> dispatch to the compute backend. Each stage is terminal on
//! failure; nothing is retried and no state carries over to the next call.

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use tracing::{info, warn};

use crate::domain::entities::inference::{InferenceRequest, InferenceResult};
use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::CredentialStore;
use crate::services::compute::ComputeBackend;
use crate::services::rate_limit::{Admission, FixedWindowLimiter};
use crate::services::token::TokenService;

use super::config::GatewayConfig;

// Verified when a username does not exist, so the unknown-user path costs
// one bcrypt round just like the known-user path.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    bcrypt::hash("timing-equalizer", bcrypt::DEFAULT_COST)
        .unwrap_or_else(|_| String::from("$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW"))
});

/// Gateway orchestrating credential checks, token handling, throttling, and
/// dispatch
pub struct GatewayService<U, B>
where
    U: CredentialStore,
    B: ComputeBackend,
{
    /// Credential store for identity lookups
    credentials: Arc<U>,
    /// Token service for issuance and validation
    tokens: Arc<TokenService>,
    /// Per-identity limiter for inference calls
    limiter: Arc<FixedWindowLimiter>,
    /// Optional per-identity limiter for login attempts
    login_limiter: Option<Arc<FixedWindowLimiter>>,
    /// Compute backend requests are dispatched to
    backend: Arc<B>,
    /// Service configuration
    config: GatewayConfig,
}

impl<U, B> GatewayService<U, B>
where
    U: CredentialStore,
    B: ComputeBackend,
{
    /// Create a new gateway service
    pub fn new(
        credentials: Arc<U>,
        tokens: Arc<TokenService>,
        limiter: Arc<FixedWindowLimiter>,
        backend: Arc<B>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            credentials,
            tokens,
            limiter,
            login_limiter: None,
            backend,
            config,
        }
    }

    /// Enable login throttling with a dedicated limiter
    pub fn with_login_limiter(mut self, limiter: Arc<FixedWindowLimiter>) -> Self {
        self.login_limiter = Some(limiter);
        self
    }

    /// Authenticate a caller and issue a bearer token
    ///
    /// Unknown usernames, disabled accounts, and wrong passwords all fail
    /// with the same `InvalidCredentials` error. Either verification and
    /// issuance both succeed, or the whole call fails; there is no partial
    /// state.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResponse> {
        if let Some(login_limiter) = &self.login_limiter {
            if let Admission::Rejected { retry_after_seconds } = login_limiter.try_admit(username)
            {
                return Err(DomainError::Throttled { retry_after_seconds });
            }
        }

        let user = match self.credentials.find_by_username(username).await? {
            Some(user) => user,
            None => {
                let _ = bcrypt::verify(password, &DUMMY_HASH);
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !user.active {
            warn!(username, "login attempt for disabled account");
            return Err(AuthError::InvalidCredentials.into());
        }

        let password_matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|_| DomainError::Auth(AuthError::InvalidCredentials))?;
        if !password_matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user.username)?;
        info!(username = %user.username, "user logged in");

        Ok(AuthResponse::bearer(token, self.tokens.ttl_seconds()))
    }

    /// Run one protected inference call
    ///
    /// Pipeline: validate token, admit through the rate limiter, check the
    /// input shape, dispatch to the backend. A supplied deadline is raced
    /// against the backend call only; deadline expiry yields `Cancelled`
    /// with no retry.
    pub async fn invoke(
        &self,
        token: &str,
        request: &InferenceRequest,
        deadline: Option<Duration>,
    ) -> DomainResult<InferenceResult> {
        let claims = self.tokens.validate(token)?;

        if self.config.rate_limit_enabled {
            if let Admission::Rejected { retry_after_seconds } =
                self.limiter.try_admit(&claims.sub)
            {
                return Err(DomainError::Throttled { retry_after_seconds });
            }
        }

        if request.input_data.len() != self.config.input_dimension {
            return Err(DomainError::InvalidRequest {
                message: format!(
                    "input_data must have {} elements, got {}",
                    self.config.input_dimension,
                    request.input_data.len()
                ),
            });
        }

        let inference = self.backend.infer(&request.input_data);
        let output = match deadline {
            Some(limit) => tokio::time::timeout(limit, inference)
                .await
                .map_err(|_| DomainError::Cancelled)?,
            None => inference.await,
        };

        let prediction = output.map_err(|e| {
            warn!(username = %claims.sub, error = %e, "inference failed");
            DomainError::Compute {
                message: e.to_string(),
            }
        })?;

        info!(username = %claims.sub, "inference completed");
        Ok(InferenceResult {
            prediction,
            model_version: request.model_version.clone(),
        })
    }

    /// Resolve the caller behind a token to their stored profile
    ///
    /// A valid token whose account has since disappeared or been disabled is
    /// treated like any other credential failure.
    pub async fn current_user(&self, token: &str) -> DomainResult<User> {
        let claims = self.tokens.validate(token)?;

        self.credentials
            .find_by_username(&claims.sub)
            .await?
            .filter(|user| user.active)
            .ok_or_else(|| AuthError::InvalidCredentials.into())
    }

    /// Whether the compute backend reports itself ready
    pub async fn backend_ready(&self) -> bool {
        self.backend.is_ready().await
    }
}
