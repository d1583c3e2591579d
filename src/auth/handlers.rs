use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, instrument, warn};

use crate::{
    auth::{
        dto::{PublicUser, SigninRequest, SignupRequest},
        services::AuthError,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn error_response(err: AuthError) -> (StatusCode, String) {
    match err {
        AuthError::InvalidCredentials | AuthError::DuplicateCredential => {
            (StatusCode::FORBIDDEN, err.to_string())
        }
        AuthError::Internal(err) => {
            error!(error = %err, "auth internal error");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(mut payload): Json<SignupRequest>,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err((StatusCode::BAD_REQUEST, "Invalid email".into()));
    }

    if payload.password.is_empty() {
        warn!("empty password");
        return Err((StatusCode::BAD_REQUEST, "Password must not be empty".into()));
    }

    let user = state
        .auth
        .signup(&payload.email, &payload.password)
        .await
        .map_err(error_response)?;

    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    Json(mut payload): Json<SigninRequest>,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err((StatusCode::BAD_REQUEST, "Invalid email".into()));
    }

    if payload.password.is_empty() {
        warn!("empty password");
        return Err((StatusCode::BAD_REQUEST, "Password must not be empty".into()));
    }

    let user = state
        .auth
        .signin(&payload.email, &payload.password)
        .await
        .map_err(error_response)?;

    Ok(Json(user))
}
