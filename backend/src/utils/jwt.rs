//! JWT token utilities for authentication and authorization.
//!
//! Session tokens are stateless bearer credentials: validity is proven by
//! the HS256 signature and the expiry claim alone. There is no server-side
//! session table, and consequently a token cannot be revoked before it
//! expires; that is an accepted design constraint, not an oversight.
//! Signature comparison happens inside `jsonwebtoken` and is
//! constant-time.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{ApiError, ApiResult};
use crate::repositories::models::{Account, Role};

/// JWT claims carried by a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Account ID
    pub sub: i64,
    /// Username at issuance
    pub username: String,
    /// Role at issuance
    pub role: Role,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

impl Claims {
    pub fn account_id(&self) -> i64 {
        self.sub
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Check if the token carries a specific role
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Check if the token belongs to an admin
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

/// JWT token utility for creating and validating tokens
#[derive(Clone)]
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: u64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance with keys derived from the config.
    pub fn new(config: &Config) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in_seconds: config.jwt_expires_in_seconds,
        }
    }

    /// Generate a session token for an authenticated account.
    pub fn generate_token(&self, account: &Account) -> ApiResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in_seconds as i64);

        let claims = Claims {
            sub: account.id,
            username: account.username.clone(),
            role: account.role,
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::internal(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode a session token.
    ///
    /// Verification is all-or-nothing: a bad signature, a malformed
    /// structure, and a past-expiry token all map onto the same error.
    pub fn validate_token(&self, token: &str) -> ApiResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| ApiError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(secret: &str) -> Config {
        Config {
            server_port: 0,
            jwt_secret: secret.to_string(),
            jwt_expires_in_seconds: 3_600,
            rate_limit_window_seconds: 900,
            general_rate_limit: 100,
            auth_rate_limit: 5,
            kpi_jitter_seed: Some(42),
        }
    }

    fn test_account() -> Account {
        Account {
            id: 1,
            username: "admin".to_string(),
            password_hash: "irrelevant".to_string(),
            role: Role::Admin,
            email: "admin@company.com".to_string(),
        }
    }

    #[test]
    fn test_round_trip_preserves_claims() {
        let jwt_utils = JwtUtils::new(&test_config("test-secret"));
        let account = test_account();

        let token = jwt_utils.generate_token(&account).unwrap();
        let claims = jwt_utils.validate_token(&token).unwrap();

        assert_eq!(claims.account_id(), account.id);
        assert_eq!(claims.username, account.username);
        assert_eq!(claims.role(), account.role);
        assert!(claims.is_admin());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_signed_with_another_secret_is_rejected() {
        let issuer = JwtUtils::new(&test_config("first-secret"));
        let verifier = JwtUtils::new(&test_config("second-secret"));

        let token = issuer.generate_token(&test_account()).unwrap();

        assert_eq!(
            verifier.validate_token(&token).unwrap_err(),
            ApiError::InvalidToken
        );
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = test_config("test-secret");
        let jwt_utils = JwtUtils::new(&config);

        // Hand-roll a token whose expiry is well past the default leeway.
        let now = Utc::now();
        let claims = Claims {
            sub: 1,
            username: "admin".to_string(),
            role: Role::Admin,
            exp: (now - Duration::hours(2)).timestamp() as usize,
            iat: (now - Duration::hours(3)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            jwt_utils.validate_token(&token).unwrap_err(),
            ApiError::InvalidToken
        );
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let jwt_utils = JwtUtils::new(&test_config("test-secret"));

        assert_eq!(
            jwt_utils.validate_token("not-a-token").unwrap_err(),
            ApiError::InvalidToken
        );
    }
}
