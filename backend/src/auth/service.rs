//! Core business logic for the authentication system.

use crate::api::common::validation_errors_to_message;
use crate::auth::models::{LoginRequest, LoginResponse};
use crate::errors::{ApiError, ApiResult};
use crate::repositories::account_repository::AccountRepository;
use crate::utils::jwt::JwtUtils;
use validator::Validate;

/// Authentication service for credential checks and token issuance
pub struct AuthService<'a> {
    accounts: &'a AccountRepository,
    jwt_utils: &'a JwtUtils,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(accounts: &'a AccountRepository, jwt_utils: &'a JwtUtils) -> Self {
        AuthService {
            accounts,
            jwt_utils,
        }
    }

    /// Authenticate an account and issue a session token.
    ///
    /// Unknown usernames and wrong passwords intentionally produce the
    /// same error, so responses carry no username-enumeration signal.
    pub async fn login(&self, login_request: LoginRequest) -> ApiResult<LoginResponse> {
        // Validate input
        if let Err(validation_errors) = login_request.validate() {
            return Err(ApiError::validation(validation_errors_to_message(
                validation_errors,
            )));
        }

        let account = self
            .accounts
            .find_by_username(&login_request.username)
            .ok_or(ApiError::InvalidCredentials)?;

        let valid = bcrypt::verify(&login_request.password, &account.password_hash)
            .map_err(|e| ApiError::internal(format!("Password verification failed: {}", e)))?;
        if !valid {
            return Err(ApiError::InvalidCredentials);
        }

        let token = self.jwt_utils.generate_token(account)?;

        tracing::info!("Login succeeded for account {}", account.id);

        Ok(LoginResponse {
            id: account.id,
            username: account.username.clone(),
            role: account.role,
            email: account.email.clone(),
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::repositories::models::Role;

    fn test_config() -> Config {
        Config {
            server_port: 0,
            jwt_secret: "test-secret".to_string(),
            jwt_expires_in_seconds: 3_600,
            rate_limit_window_seconds: 900,
            general_rate_limit: 100,
            auth_rate_limit: 5,
            kpi_jitter_seed: Some(42),
        }
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_with_valid_credentials_issues_matching_token() {
        let accounts = AccountRepository::seeded();
        let jwt_utils = JwtUtils::new(&test_config());
        let service = AuthService::new(&accounts, &jwt_utils);

        let response = service.login(request("admin", "password")).await.unwrap();

        assert_eq!(response.id, 1);
        assert_eq!(response.username, "admin");
        assert_eq!(response.role, Role::Admin);

        let claims = jwt_utils.validate_token(&response.token).unwrap();
        assert_eq!(claims.account_id(), response.id);
        assert_eq!(claims.role(), response.role);
    }

    #[tokio::test]
    async fn test_bad_credentials_produce_one_error_shape() {
        let accounts = AccountRepository::seeded();
        let jwt_utils = JwtUtils::new(&test_config());
        let service = AuthService::new(&accounts, &jwt_utils);

        let wrong_password = service
            .login(request("admin", "wrong-password"))
            .await
            .unwrap_err();
        let unknown_username = service
            .login(request("nobody", "password"))
            .await
            .unwrap_err();

        assert_eq!(wrong_password, ApiError::InvalidCredentials);
        assert_eq!(wrong_password, unknown_username);
    }

    #[tokio::test]
    async fn test_missing_fields_fail_validation() {
        let accounts = AccountRepository::seeded();
        let jwt_utils = JwtUtils::new(&test_config());
        let service = AuthService::new(&accounts, &jwt_utils);

        let error = service.login(request("", "password")).await.unwrap_err();

        assert!(matches!(error, ApiError::Validation(_)));
    }
}
