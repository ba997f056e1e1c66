pub mod token;

use axum::routing::get;
use axum::Router;

/// Build the route table. Called once at startup and handed to `axum::serve`.
pub fn build_router() -> Router {
    Router::new().route(token::TOKEN_PATH, get(token::token))
}
