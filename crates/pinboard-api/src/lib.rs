pub mod error;
pub mod password;
pub mod posts;
pub mod state;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use state::{AppState, AppStateInner};

/// Build the full route table over an already-opened database.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users/{id}", get(users::get_user))
        .route("/posts", post(posts::create_post))
        .route("/posts/{id}", get(posts::get_post))
        .route("/posts/users/{id}", get(posts::list_posts_by_user))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health() -> &'static str {
    "ok"
}
