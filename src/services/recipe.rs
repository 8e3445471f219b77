//! Recipe service
//!
//! Business logic for recipe creation and editing. Tags are derived from
//! the recipe's text on every create and edit; clients never supply them.

use std::sync::Arc;

use anyhow::Context;

use crate::db::repositories::RecipeRepository;
use crate::models::{CreateRecipeInput, Recipe, RecipeWithCreator, UpdateRecipeInput};
use crate::services::tags::extract_tags;
use crate::services::vocabulary::{Vocabulary, VOCABULARY};

/// Error types for recipe service operations
#[derive(Debug, thiserror::Error)]
pub enum RecipeServiceError {
    /// Recipe not found
    #[error("Recipe not found: {0}")]
    NotFound(i64),

    /// No user matches the creator token
    #[error("Unknown creator token")]
    UnknownCreator,

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Recipe service
pub struct RecipeService {
    repo: Arc<dyn RecipeRepository>,
    vocabulary: Vocabulary,
}

impl RecipeService {
    /// Create a recipe service using the process-wide vocabulary
    pub fn new(repo: Arc<dyn RecipeRepository>) -> Self {
        Self::with_vocabulary(repo, VOCABULARY.clone())
    }

    /// Create a recipe service with a specific vocabulary
    pub fn with_vocabulary(repo: Arc<dyn RecipeRepository>, vocabulary: Vocabulary) -> Self {
        Self { repo, vocabulary }
    }

    /// Create a recipe owned by the given user, deriving its tags
    pub async fn create(
        &self,
        input: CreateRecipeInput,
        creator_token: &str,
    ) -> Result<Recipe, RecipeServiceError> {
        validate_text_fields(&input.name, input.difficulty)?;

        let tags = extract_tags(
            &input.name,
            &input.description,
            &input.ingredients,
            &input.steps,
            &self.vocabulary,
        );

        self.repo
            .create(input, tags, creator_token)
            .await
            .context("Failed to create recipe")?
            .ok_or(RecipeServiceError::UnknownCreator)
    }

    /// Edit a recipe, re-deriving its tags from the new text
    pub async fn edit(
        &self,
        recipe_id: i64,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, RecipeServiceError> {
        validate_text_fields(&input.name, input.difficulty)?;

        let tags = extract_tags(
            &input.name,
            &input.description,
            &input.ingredients,
            &input.steps,
            &self.vocabulary,
        );

        self.repo
            .update(recipe_id, input, tags)
            .await
            .context("Failed to update recipe")?
            .ok_or(RecipeServiceError::NotFound(recipe_id))
    }

    /// Get a recipe together with its creator
    pub async fn get(&self, recipe_id: i64) -> Result<RecipeWithCreator, RecipeServiceError> {
        self.repo
            .get_by_id(recipe_id)
            .await
            .context("Failed to fetch recipe")?
            .ok_or(RecipeServiceError::NotFound(recipe_id))
    }

    /// Soft-deactivate or reactivate a recipe
    pub async fn set_active(
        &self,
        recipe_id: i64,
        active: bool,
    ) -> Result<(), RecipeServiceError> {
        let changed = self
            .repo
            .set_active(recipe_id, active)
            .await
            .context("Failed to change recipe state")?;
        if !changed {
            return Err(RecipeServiceError::NotFound(recipe_id));
        }
        Ok(())
    }

    /// Hard-delete a recipe with all its relationships
    pub async fn delete(&self, recipe_id: i64) -> Result<(), RecipeServiceError> {
        let deleted = self
            .repo
            .delete(recipe_id)
            .await
            .context("Failed to delete recipe")?;
        if !deleted {
            return Err(RecipeServiceError::NotFound(recipe_id));
        }
        Ok(())
    }
}

fn validate_text_fields(name: &str, difficulty: i64) -> Result<(), RecipeServiceError> {
    if name.trim().is_empty() {
        return Err(RecipeServiceError::Validation(
            "Recipe name cannot be empty".to_string(),
        ));
    }
    if !(1..=5).contains(&difficulty) {
        return Err(RecipeServiceError::Validation(
            "Difficulty must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Recipe repository capturing the tags passed to create/update
    #[derive(Default)]
    struct CapturingRecipes {
        created_tags: Mutex<Option<Vec<String>>>,
        known_creator: bool,
    }

    #[async_trait]
    impl RecipeRepository for CapturingRecipes {
        async fn create(
            &self,
            input: CreateRecipeInput,
            tags: Vec<String>,
            creator_token: &str,
        ) -> Result<Option<Recipe>> {
            if !self.known_creator {
                return Ok(None);
            }
            *self.created_tags.lock().unwrap() = Some(tags.clone());
            Ok(Some(Recipe {
                id: 1,
                name: input.name,
                description: input.description,
                country: input.country,
                difficulty: input.difficulty,
                image: input.image,
                created: "2024-01-01T00:00:00+00:00".to_string(),
                ingredients: input.ingredients,
                steps: input.steps,
                tags,
                rating: 0.0,
                active: true,
            }))
        }

        async fn update(
            &self,
            _id: i64,
            _input: UpdateRecipeInput,
            _tags: Vec<String>,
        ) -> Result<Option<Recipe>> {
            Ok(None)
        }

        async fn get_by_id(&self, _id: i64) -> Result<Option<RecipeWithCreator>> {
            Ok(None)
        }

        async fn set_rating(&self, _id: i64, _rating: f64) -> Result<()> {
            Ok(())
        }

        async fn set_active(&self, _id: i64, _active: bool) -> Result<bool> {
            Ok(false)
        }

        async fn delete(&self, _id: i64) -> Result<bool> {
            Ok(false)
        }
    }

    fn input(name: &str, description: &str) -> CreateRecipeInput {
        CreateRecipeInput {
            name: name.to_string(),
            description: description.to_string(),
            country: "ES".to_string(),
            difficulty: 2,
            image: String::new(),
            ingredients: vec!["sal".to_string()],
            steps: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_create_derives_tags_from_text() {
        let repo = Arc::new(CapturingRecipes {
            known_creator: true,
            ..Default::default()
        });
        let service = RecipeService::new(repo.clone());

        let recipe = service
            .create(input("Pollo al limón", "con sal"), "tok-1")
            .await
            .unwrap();

        assert_eq!(recipe.tags, vec!["Pollo", "limón", "sal"]);
        assert_eq!(
            repo.created_tags.lock().unwrap().as_deref(),
            Some(&["Pollo".to_string(), "limón".to_string(), "sal".to_string()][..])
        );
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let repo = Arc::new(CapturingRecipes {
            known_creator: true,
            ..Default::default()
        });
        let service = RecipeService::new(repo);

        let err = service.create(input("  ", "desc"), "tok-1").await.unwrap_err();
        assert!(matches!(err, RecipeServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_difficulty() {
        let repo = Arc::new(CapturingRecipes {
            known_creator: true,
            ..Default::default()
        });
        let service = RecipeService::new(repo);

        let mut bad = input("Tortilla", "");
        bad.difficulty = 9;
        let err = service.create(bad, "tok-1").await.unwrap_err();
        assert!(matches!(err, RecipeServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_with_unknown_creator() {
        let repo = Arc::new(CapturingRecipes::default());
        let service = RecipeService::new(repo);

        let err = service.create(input("Tortilla", ""), "nobody").await.unwrap_err();
        assert!(matches!(err, RecipeServiceError::UnknownCreator));
    }

    #[tokio::test]
    async fn test_edit_missing_recipe_is_not_found() {
        let repo = Arc::new(CapturingRecipes {
            known_creator: true,
            ..Default::default()
        });
        let service = RecipeService::new(repo);

        let update = UpdateRecipeInput {
            name: "Tortilla".to_string(),
            description: String::new(),
            country: "ES".to_string(),
            difficulty: 1,
            image: String::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        };
        let err = service.edit(42, update).await.unwrap_err();
        assert!(matches!(err, RecipeServiceError::NotFound(42)));
    }
}
