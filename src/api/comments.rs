//! Comment API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::services::CommentServiceError;

#[derive(Debug, Deserialize)]
pub struct CommentRecipeRequest {
    pub rid: i64,
    pub token: String,
    pub comment: String,
    pub rating: f64,
}

/// Comment on a recipe; the recipe's aggregate rating is recomputed
/// afterwards
pub async fn create_comment(
    State(state): State<AppState>,
    Json(req): Json<CommentRecipeRequest>,
) -> impl IntoResponse {
    match state
        .comment_service
        .create(req.rid, &req.token, &req.comment, req.rating)
        .await
    {
        Ok(comment) => (StatusCode::CREATED, Json(comment)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Get a recipe's comments with their authors
pub async fn get_comments(
    State(state): State<AppState>,
    Path(recipe_id): Path<i64>,
) -> impl IntoResponse {
    match state.comment_service.list(recipe_id).await {
        Ok(comments) => Json(serde_json::json!({ "comments": comments })).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(e: CommentServiceError) -> Response {
    let status = match &e {
        CommentServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        CommentServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        CommentServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(serde_json::json!({ "error": e.to_string() })),
    )
        .into_response()
}
