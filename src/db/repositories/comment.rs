//! Comment repository

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use neo4rs::{query, Graph, Node};

use crate::db::repositories::recipe::node_to_user;
use crate::models::{Comment, CommentWithAuthor, RatingEntry};

/// Comment repository trait
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Record a `Commented` relationship from the user to the recipe.
    ///
    /// Returns `None` when the recipe or the user does not exist.
    async fn create(
        &self,
        recipe_id: i64,
        user_token: &str,
        comment: &str,
        rating: f64,
    ) -> Result<Option<Comment>>;

    /// Read every comment's rating for the recipe, ordered by user token
    /// ascending, then creation time ascending.
    async fn ratings_for_recipe(&self, recipe_id: i64) -> Result<Vec<RatingEntry>>;

    /// List the recipe's comments with their authors, newest first
    async fn list_for_recipe(&self, recipe_id: i64) -> Result<Vec<CommentWithAuthor>>;
}

/// Comment repository backed by Neo4j
pub struct Neo4jCommentRepository {
    graph: Graph,
}

impl Neo4jCommentRepository {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl CommentRepository for Neo4jCommentRepository {
    async fn create(
        &self,
        recipe_id: i64,
        user_token: &str,
        comment: &str,
        rating: f64,
    ) -> Result<Option<Comment>> {
        let created = Utc::now().to_rfc3339();

        let q = query(
            r#"MATCH (user:User {token: $token}), (recipe:Recipe)
               WHERE id(recipe) = $rid
               CREATE (user)-[cmt:Commented {
                   comment: $comment, rating: $rating, created: $created
               }]->(recipe)
               RETURN id(recipe) AS id"#,
        )
        .param("token", user_token)
        .param("rid", recipe_id)
        .param("comment", comment)
        .param("rating", rating)
        .param("created", created.as_str());

        let mut stream = self
            .graph
            .execute(q)
            .await
            .context("Failed to create comment")?;

        if stream
            .next()
            .await
            .context("Failed to confirm comment creation")?
            .is_none()
        {
            // Recipe or user did not match, so no relationship was created
            return Ok(None);
        }

        Ok(Some(Comment {
            recipe_id,
            user_token: user_token.to_string(),
            comment: comment.to_string(),
            rating,
            created,
        }))
    }

    async fn ratings_for_recipe(&self, recipe_id: i64) -> Result<Vec<RatingEntry>> {
        let q = query(
            r#"MATCH (u:User)-[c:Commented]->(r:Recipe)
               WHERE id(r) = $rid
               RETURN u.token AS token, c.rating AS rating, c.created AS created
               ORDER BY token ASC, created ASC"#,
        )
        .param("rid", recipe_id);

        let mut stream = self
            .graph
            .execute(q)
            .await
            .context("Failed to read comment ratings")?;

        let mut entries = Vec::new();
        while let Some(row) = stream.next().await.context("Failed to read rating row")? {
            entries.push(RatingEntry {
                user_token: row.get("token").context("Missing comment author token")?,
                rating: row.get("rating").context("Missing comment rating")?,
                created: row.get("created").unwrap_or_default(),
            });
        }

        Ok(entries)
    }

    async fn list_for_recipe(&self, recipe_id: i64) -> Result<Vec<CommentWithAuthor>> {
        let q = query(
            r#"MATCH (u:User)-[c:Commented]->(r:Recipe)
               WHERE id(r) = $rid
               RETURN u, c.comment AS comment, c.rating AS rating, c.created AS created
               ORDER BY created DESC"#,
        )
        .param("rid", recipe_id);

        let mut stream = self
            .graph
            .execute(q)
            .await
            .context("Failed to list comments")?;

        let mut comments = Vec::new();
        while let Some(row) = stream.next().await.context("Failed to read comment row")? {
            let user: Node = row.get("u").context("Missing comment author")?;
            let author = node_to_user(&user)?;
            comments.push(CommentWithAuthor {
                comment: Comment {
                    recipe_id,
                    user_token: author.token.clone(),
                    comment: row.get("comment").context("Missing comment text")?,
                    rating: row.get("rating").context("Missing comment rating")?,
                    created: row.get("created").unwrap_or_default(),
                },
                author,
            });
        }

        Ok(comments)
    }
}
