//! API layer - HTTP handlers and routing
//!
//! A thin surface over the services: only the entry points that exercise
//! the core (recipe create/edit, comment create) plus read endpoints.
//! Authentication is external; requests carry the caller's opaque token.

pub mod comments;
pub mod recipes;
pub mod state;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use state::AppState;

/// Build the application router
pub fn build_router(state: AppState, cors_origin: &str) -> Router {
    let allowed_origin = cors_origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("*"));

    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/recipe/create", post(recipes::create_recipe))
        .route("/recipe/edit", post(recipes::edit_recipe))
        .route(
            "/recipe/{id}",
            get(recipes::get_recipe).delete(recipes::delete_recipe),
        )
        .route("/recipe/comment", post(comments::create_comment))
        .route("/recipe/{id}/comments", get(comments::get_comments))
        .route("/admin/recipe/change_state", post(recipes::change_recipe_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
