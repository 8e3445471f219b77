//! Data models
//!
//! This module contains all data structures used throughout the TasteIt
//! backend. Models represent:
//! - Graph entities (Recipe, User) and relationships (Comment)
//! - Service input types
//! - Internal data transfer objects

mod comment;
mod recipe;
mod user;

pub use comment::{Comment, CommentWithAuthor, RatingEntry};
pub use recipe::{CreateRecipeInput, Recipe, RecipeWithCreator, UpdateRecipeInput};
pub use user::User;
