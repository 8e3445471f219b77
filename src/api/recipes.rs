//! Recipe API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::models::{CreateRecipeInput, UpdateRecipeInput};
use crate::services::RecipeServiceError;

#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub token: String,
    pub name: String,
    pub description: String,
    pub country: String,
    pub difficulty: i64,
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Create a recipe; tags are derived server-side from its text
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(req): Json<CreateRecipeRequest>,
) -> impl IntoResponse {
    let input = CreateRecipeInput {
        name: req.name,
        description: req.description,
        country: req.country,
        difficulty: req.difficulty,
        image: req.image,
        ingredients: req.ingredients,
        steps: req.steps,
    };

    match state.recipe_service.create(input, &req.token).await {
        Ok(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct EditRecipeRequest {
    pub rid: i64,
    pub name: String,
    pub description: String,
    pub country: String,
    pub difficulty: i64,
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Edit a recipe; tags are re-derived from the new text
pub async fn edit_recipe(
    State(state): State<AppState>,
    Json(req): Json<EditRecipeRequest>,
) -> impl IntoResponse {
    let input = UpdateRecipeInput {
        name: req.name,
        description: req.description,
        country: req.country,
        difficulty: req.difficulty,
        image: req.image,
        ingredients: req.ingredients,
        steps: req.steps,
    };

    match state.recipe_service.edit(req.rid, input).await {
        Ok(recipe) => Json(recipe).into_response(),
        Err(e) => error_response(e),
    }
}

/// Get a recipe with its creator
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.recipe_service.get(id).await {
        Ok(recipe) => Json(recipe).into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct ChangeStateRequest {
    pub rid: i64,
    pub active: bool,
}

/// Soft-deactivate or reactivate a recipe
pub async fn change_recipe_state(
    State(state): State<AppState>,
    Json(req): Json<ChangeStateRequest>,
) -> impl IntoResponse {
    match state.recipe_service.set_active(req.rid, req.active).await {
        Ok(()) => Json(serde_json::json!({ "rid": req.rid, "active": req.active })).into_response(),
        Err(e) => error_response(e),
    }
}

/// Hard-delete a recipe and all its relationships
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.recipe_service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(e: RecipeServiceError) -> Response {
    let status = match &e {
        RecipeServiceError::NotFound(_) | RecipeServiceError::UnknownCreator => {
            StatusCode::NOT_FOUND
        }
        RecipeServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        RecipeServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(serde_json::json!({ "error": e.to_string() })),
    )
        .into_response()
}
