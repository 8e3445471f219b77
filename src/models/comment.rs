//! Comment model

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Comment relationship `(:User)-[:Commented]->(:Recipe)`
///
/// Many comments may exist per (user, recipe) pair over time; only one of
/// them counts toward the aggregate rating (see `services::rating`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub recipe_id: i64,
    pub user_token: String,
    pub comment: String,
    /// The author's individual score, 0.0 to 5.0
    pub rating: f64,
    /// Creation timestamp, RFC 3339
    pub created: String,
}

/// Comment with the commenting user, for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: User,
}

/// One comment's rating as read back for aggregation
///
/// The repository returns these ordered by `user_token` ascending, then
/// `created` ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingEntry {
    pub user_token: String,
    pub rating: f64,
    pub created: String,
}
