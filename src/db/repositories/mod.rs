//! Graph repositories
//!
//! Repository pattern implementations for graph access. Each repository
//! handles the Cypher queries for a specific entity.

pub mod comment;
pub mod recipe;

pub use comment::{CommentRepository, Neo4jCommentRepository};
pub use recipe::{Neo4jRecipeRepository, RecipeRepository};
