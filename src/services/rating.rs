//! Rating aggregation
//!
//! Recomputes a recipe's aggregate rating after a comment is added: read
//! every comment's rating, reduce to one rating per distinct user, average,
//! and persist the mean back onto the recipe node.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::db::repositories::{CommentRepository, RecipeRepository};

/// Recomputes the aggregate rating of a recipe.
///
/// One read, one write, no retries; store failures propagate to the caller.
/// Concurrent recomputations for the same recipe are a read-modify-write
/// race and may persist a rating from a stale read. The aggregate is a
/// derived projection, so the races resolve on the next comment.
pub struct RatingAggregator {
    comments: Arc<dyn CommentRepository>,
    recipes: Arc<dyn RecipeRepository>,
}

impl RatingAggregator {
    pub fn new(comments: Arc<dyn CommentRepository>, recipes: Arc<dyn RecipeRepository>) -> Self {
        Self { comments, recipes }
    }

    /// Recompute and persist the recipe's aggregate rating.
    ///
    /// Comments arrive ordered by user token, then creation time ascending;
    /// the first entry seen per user wins, so each user contributes the
    /// rating of their earliest comment. Returns the persisted mean, or
    /// `None` when the recipe has no comments (nothing to aggregate, no
    /// write is performed).
    pub async fn recompute(&self, recipe_id: i64) -> Result<Option<f64>> {
        let entries = self
            .comments
            .ratings_for_recipe(recipe_id)
            .await
            .context("Failed to read ratings")?;

        let mut per_user: HashMap<String, f64> = HashMap::new();
        for entry in entries {
            per_user.entry(entry.user_token).or_insert(entry.rating);
        }

        if per_user.is_empty() {
            return Ok(None);
        }

        let mean = per_user.values().sum::<f64>() / per_user.len() as f64;

        self.recipes
            .set_rating(recipe_id, mean)
            .await
            .context("Failed to persist rating")?;

        Ok(Some(mean))
    }
}
