//! Recipe repository

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use neo4rs::{query, Graph, Node};

use crate::models::{CreateRecipeInput, Recipe, RecipeWithCreator, UpdateRecipeInput, User};

/// Recipe repository trait
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Create a recipe owned by the user with the given token.
    ///
    /// Tags are supplied by the caller (derived by the tag extractor, not
    /// taken from client input). Returns `None` when no user matches the
    /// token.
    async fn create(
        &self,
        input: CreateRecipeInput,
        tags: Vec<String>,
        creator_token: &str,
    ) -> Result<Option<Recipe>>;

    /// Replace a recipe's textual fields and tags. Returns `None` when the
    /// recipe does not exist.
    async fn update(
        &self,
        id: i64,
        input: UpdateRecipeInput,
        tags: Vec<String>,
    ) -> Result<Option<Recipe>>;

    /// Get a recipe together with its creator
    async fn get_by_id(&self, id: i64) -> Result<Option<RecipeWithCreator>>;

    /// Persist a new aggregate rating. Single-field update.
    async fn set_rating(&self, id: i64, rating: f64) -> Result<()>;

    /// Flip the soft-deactivation flag
    async fn set_active(&self, id: i64, active: bool) -> Result<bool>;

    /// Hard-delete the recipe and all its relationships
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Recipe repository backed by Neo4j
pub struct Neo4jRecipeRepository {
    graph: Graph,
}

impl Neo4jRecipeRepository {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl RecipeRepository for Neo4jRecipeRepository {
    async fn create(
        &self,
        input: CreateRecipeInput,
        tags: Vec<String>,
        creator_token: &str,
    ) -> Result<Option<Recipe>> {
        let created = Utc::now().to_rfc3339();

        let q = query(
            r#"MATCH (user:User {token: $token})
               CREATE (recipe:Recipe {
                   name: $name, description: $description, country: $country,
                   created: $created, image: $image, difficulty: $difficulty,
                   ingredients: $ingredients, steps: $steps, tags: $tags,
                   rating: 0.0, active: true
               })-[:Created]->(user)
               RETURN id(recipe) AS id"#,
        )
        .param("token", creator_token)
        .param("name", input.name.as_str())
        .param("description", input.description.as_str())
        .param("country", input.country.as_str())
        .param("created", created.as_str())
        .param("image", input.image.as_str())
        .param("difficulty", input.difficulty)
        .param("ingredients", input.ingredients.clone())
        .param("steps", input.steps.clone())
        .param("tags", tags.clone());

        let mut stream = self
            .graph
            .execute(q)
            .await
            .context("Failed to create recipe")?;

        let Some(row) = stream.next().await.context("Failed to read created recipe id")? else {
            // No user matched the token, so nothing was created
            return Ok(None);
        };
        let id: i64 = row.get("id").context("Missing recipe id")?;

        Ok(Some(Recipe {
            id,
            name: input.name,
            description: input.description,
            country: input.country,
            difficulty: input.difficulty,
            image: input.image,
            created,
            ingredients: input.ingredients,
            steps: input.steps,
            tags,
            rating: 0.0,
            active: true,
        }))
    }

    async fn update(
        &self,
        id: i64,
        input: UpdateRecipeInput,
        tags: Vec<String>,
    ) -> Result<Option<Recipe>> {
        let q = query(
            r#"MATCH (r:Recipe) WHERE id(r) = $rid
               SET r.name = $name, r.description = $description,
                   r.country = $country, r.image = $image,
                   r.difficulty = $difficulty, r.ingredients = $ingredients,
                   r.steps = $steps, r.tags = $tags
               RETURN r, id(r) AS id"#,
        )
        .param("rid", id)
        .param("name", input.name.as_str())
        .param("description", input.description.as_str())
        .param("country", input.country.as_str())
        .param("image", input.image.as_str())
        .param("difficulty", input.difficulty)
        .param("ingredients", input.ingredients)
        .param("steps", input.steps)
        .param("tags", tags);

        let mut stream = self
            .graph
            .execute(q)
            .await
            .context("Failed to update recipe")?;

        let Some(row) = stream.next().await.context("Failed to read updated recipe")? else {
            return Ok(None);
        };

        let node: Node = row.get("r").context("Missing recipe node")?;
        let id: i64 = row.get("id").context("Missing recipe id")?;

        Ok(Some(node_to_recipe(&node, id)?))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<RecipeWithCreator>> {
        let q = query(
            r#"MATCH (r:Recipe)-[:Created]->(u:User)
               WHERE id(r) = $rid
               RETURN r, id(r) AS id, u"#,
        )
        .param("rid", id);

        let mut stream = self
            .graph
            .execute(q)
            .await
            .context("Failed to fetch recipe")?;

        let Some(row) = stream.next().await.context("Failed to read recipe row")? else {
            return Ok(None);
        };

        let node: Node = row.get("r").context("Missing recipe node")?;
        let id: i64 = row.get("id").context("Missing recipe id")?;
        let user: Node = row.get("u").context("Missing creator node")?;

        Ok(Some(RecipeWithCreator {
            recipe: node_to_recipe(&node, id)?,
            creator: node_to_user(&user)?,
        }))
    }

    async fn set_rating(&self, id: i64, rating: f64) -> Result<()> {
        let q = query("MATCH (r:Recipe) WHERE id(r) = $rid SET r.rating = $rating")
            .param("rid", id)
            .param("rating", rating);

        self.graph
            .run(q)
            .await
            .context("Failed to write recipe rating")?;

        Ok(())
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<bool> {
        let q = query(
            r#"MATCH (r:Recipe) WHERE id(r) = $rid
               SET r.active = $active
               RETURN id(r) AS id"#,
        )
        .param("rid", id)
        .param("active", active);

        let mut stream = self
            .graph
            .execute(q)
            .await
            .context("Failed to change recipe state")?;

        Ok(stream.next().await?.is_some())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let q = query(
            r#"MATCH (r:Recipe) WHERE id(r) = $rid
               DETACH DELETE r
               RETURN count(*) AS deleted"#,
        )
        .param("rid", id);

        let mut stream = self
            .graph
            .execute(q)
            .await
            .context("Failed to delete recipe")?;

        let Some(row) = stream.next().await? else {
            return Ok(false);
        };
        let deleted: i64 = row.get("deleted").context("Missing delete count")?;

        Ok(deleted > 0)
    }
}

/// Map a `(:Recipe)` node to the model.
///
/// Rating and active flag default for nodes written before those fields
/// existed.
pub(crate) fn node_to_recipe(node: &Node, id: i64) -> Result<Recipe> {
    Ok(Recipe {
        id,
        name: node.get("name").context("Recipe missing name")?,
        description: node.get("description").unwrap_or_default(),
        country: node.get("country").unwrap_or_default(),
        difficulty: node.get("difficulty").unwrap_or_default(),
        image: node.get("image").unwrap_or_default(),
        created: node.get("created").unwrap_or_default(),
        ingredients: node.get("ingredients").unwrap_or_default(),
        steps: node.get("steps").unwrap_or_default(),
        tags: node.get("tags").unwrap_or_default(),
        rating: node.get("rating").unwrap_or(0.0),
        active: node.get("active").unwrap_or(true),
    })
}

/// Map a `(:User)` node to the model
pub(crate) fn node_to_user(node: &Node) -> Result<User> {
    Ok(User {
        token: node.get("token").context("User missing token")?,
        username: node.get("username").unwrap_or_default(),
    })
}
