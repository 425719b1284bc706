use contracts::system::auth::{LoginRequest, LoginResponse, MeResponse};
use contracts::shared::error::ApiError;

use crate::shared::api_client::client;

/// POST /login
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    client().post_public("/login", &request).await
}

/// GET /me
pub async fn fetch_me() -> Result<MeResponse, ApiError> {
    client().get("/me").await
}
