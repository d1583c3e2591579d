use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
}

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user/profile", get(profile))
}

/// Placeholder until per-user profile data exists.
pub async fn profile() -> Json<ProfileResponse> {
    Json(ProfileResponse {
        message: "Profile".to_string(),
    })
}
