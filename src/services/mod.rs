//! Services layer - Business logic
//!
//! This module contains the business logic of the TasteIt backend.
//! Services are responsible for:
//! - Deriving tags from recipe text against the controlled vocabulary
//! - Recomputing aggregate ratings from per-user comment ratings
//! - Validation and coordination with the graph repositories

pub mod comment;
pub mod rating;
pub mod recipe;
pub mod tags;
pub mod vocabulary;

pub use comment::{CommentService, CommentServiceError};
pub use rating::RatingAggregator;
pub use recipe::{RecipeService, RecipeServiceError};
pub use tags::{extract_tags, normalize};
pub use vocabulary::{Vocabulary, VOCABULARY};
