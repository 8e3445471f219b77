//! Recipe model

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Recipe entity
///
/// Stored as a `(:Recipe)` node in the graph, linked to its creator via a
/// `Created` relationship. The `id` is the store-assigned internal node id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub country: String,
    pub difficulty: i64,
    pub image: String,
    /// Creation timestamp, RFC 3339
    pub created: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Derived from the recipe text against the controlled vocabulary
    pub tags: Vec<String>,
    /// Mean of one rating per distinct commenting user, 0.0 until rated
    pub rating: f64,
    /// Soft-deactivation flag
    pub active: bool,
}

/// Recipe together with the user who created it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeWithCreator {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub creator: User,
}

/// Input for creating a recipe
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipeInput {
    pub name: String,
    pub description: String,
    pub country: String,
    pub difficulty: i64,
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Input for editing a recipe
///
/// All textual fields are replaced wholesale; tags are re-derived from the
/// new text, never taken from the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecipeInput {
    pub name: String,
    pub description: String,
    pub country: String,
    pub difficulty: i64,
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}
