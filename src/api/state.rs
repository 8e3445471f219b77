//! Shared application state

use std::sync::Arc;

use crate::services::{CommentService, RecipeService};

/// State shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub recipe_service: Arc<RecipeService>,
    pub comment_service: Arc<CommentService>,
}
