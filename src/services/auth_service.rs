// ============================================================================
// AUTH SERVICE - sign-in and token verification
// ============================================================================

use crate::models::{LoginRequest, LoginResponse, VerifyResponse};
use crate::services::http::{self, ApiError};

/// Exchange credentials for a bearer token. The one call in the app that
/// goes out without an Authorization header.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    log::info!("🔐 Signing in {}", email);

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    http::post_json_public("/v1/auth/login", &request).await
}

/// Cheap authenticated probe. Opened flows (the wizard) call this first so
/// a dead token is caught before any state is fetched.
pub async fn verify_token(token: &str) -> Result<VerifyResponse, ApiError> {
    http::get_json("/v1/auth/verify", token).await
}
