//! User service for registration, login and identity lookup
//!
//! # Performance
//!
//! - Password hashing/verification runs on the blocking thread pool
//! - The JWT service is passed by reference (pre-computed keys)

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use sqlx::PgPool;
use uuid::Uuid;
use validator::ValidateEmail;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user and return a signed token for them
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("Please enter your name".to_string()));
        }

        if !email.validate_email() {
            return Err(ApiError::Validation(
                "Please enter a valid email".to_string(),
            ));
        }

        if password.len() < 6 {
            return Err(ApiError::Validation(
                "Please enter a password with 6 or more characters".to_string(),
            ));
        }

        // Check if email already exists. The unique index still backs this
        // up: a concurrent insert of the same email surfaces as Conflict
        // through the sqlx error mapping.
        if UserRepository::email_exists(pool, email).await? {
            return Err(ApiError::Conflict("User already exists".to_string()));
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, name, email, &password_hash).await?;

        jwt_service
            .generate_token(user.id)
            .map_err(ApiError::Internal)
    }

    /// Login with email and password, returning a signed token
    ///
    /// Unknown email and wrong password take the same error path so a
    /// response never reveals whether an email is registered.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        if !email.validate_email() {
            return Err(ApiError::Validation(
                "Please enter a valid email".to_string(),
            ));
        }

        if password.is_empty() {
            return Err(ApiError::Validation("A password is required".to_string()));
        }

        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::InvalidCredentials);
        }

        jwt_service
            .generate_token(user.id)
            .map_err(ApiError::Internal)
    }

    /// Look up the user record behind a verified identity
    pub async fn get_current_user(pool: &PgPool, user_id: Uuid) -> Result<UserRecord, ApiError> {
        UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    // Database-backed paths are covered in tests/auth_integration_test.rs
}
