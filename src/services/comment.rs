//! Comment service
//!
//! Persists recipe comments and triggers the rating recomputation. The
//! aggregate rating is a derived projection: once the comment is durable, a
//! failed recomputation is logged and does not fail the call.

use std::sync::Arc;

use anyhow::Context;

use crate::db::repositories::CommentRepository;
use crate::models::{Comment, CommentWithAuthor};
use crate::services::rating::RatingAggregator;

/// Error types for comment service operations
#[derive(Debug, thiserror::Error)]
pub enum CommentServiceError {
    /// Recipe or commenting user not found
    #[error("Recipe or user not found for recipe {0}")]
    NotFound(i64),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Comment service
pub struct CommentService {
    repo: Arc<dyn CommentRepository>,
    aggregator: RatingAggregator,
}

impl CommentService {
    pub fn new(repo: Arc<dyn CommentRepository>, aggregator: RatingAggregator) -> Self {
        Self { repo, aggregator }
    }

    /// Create a comment on a recipe, then recompute the recipe's rating.
    ///
    /// The comment write and the rating write are not transactional
    /// together; a recompute failure leaves the previous rating in place
    /// until the next comment arrives.
    pub async fn create(
        &self,
        recipe_id: i64,
        user_token: &str,
        text: &str,
        rating: f64,
    ) -> Result<Comment, CommentServiceError> {
        if text.trim().is_empty() {
            return Err(CommentServiceError::Validation(
                "Comment text cannot be empty".to_string(),
            ));
        }
        if !(0.0..=5.0).contains(&rating) {
            return Err(CommentServiceError::Validation(
                "Rating must be between 0.0 and 5.0".to_string(),
            ));
        }

        let comment = self
            .repo
            .create(recipe_id, user_token, text, rating)
            .await
            .context("Failed to create comment")?
            .ok_or(CommentServiceError::NotFound(recipe_id))?;

        if let Err(e) = self.aggregator.recompute(recipe_id).await {
            tracing::warn!(
                recipe_id,
                "Failed to recompute rating after comment: {:#}",
                e
            );
        }

        Ok(comment)
    }

    /// List a recipe's comments with their authors
    pub async fn list(&self, recipe_id: i64) -> Result<Vec<CommentWithAuthor>, CommentServiceError> {
        Ok(self
            .repo
            .list_for_recipe(recipe_id)
            .await
            .context("Failed to list comments")?)
    }
}
