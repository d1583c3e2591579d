use axum::Router;

use crate::state::AppState;

mod dto;
pub mod handlers;
mod password;
pub mod repo;
mod repo_types;
pub mod services;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
