//! TasteIt - Recipe sharing platform backend

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tasteit::{
    api::{self, AppState},
    config::Config,
    db::{
        self,
        repositories::{Neo4jCommentRepository, Neo4jRecipeRepository},
    },
    services::{CommentService, RatingAggregator, RecipeService, VOCABULARY},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasteit=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TasteIt backend...");

    // Load configuration
    let config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!("Configuration loaded");

    // Connect to the graph store
    let graph = db::connect(&config.graph).await?;
    tracing::info!("Graph store configured: {}", config.graph.uri);

    tracing::info!("Controlled vocabulary loaded: {} terms", VOCABULARY.len());

    // Create repositories
    let recipe_repo = Arc::new(Neo4jRecipeRepository::new(graph.clone()));
    let comment_repo = Arc::new(Neo4jCommentRepository::new(graph));

    // Initialize services
    let recipe_service = Arc::new(RecipeService::new(recipe_repo.clone()));
    let aggregator = RatingAggregator::new(comment_repo.clone(), recipe_repo);
    let comment_service = Arc::new(CommentService::new(comment_repo, aggregator));

    // Build application state
    let state = AppState {
        recipe_service,
        comment_service,
    };

    // Build router
    let app = api::build_router(state, &config.server.cors_origin);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
