//! Neo4j connection setup

use anyhow::{Context, Result};
use neo4rs::Graph;

use crate::config::GraphConfig;

/// Connect to Neo4j and return a Graph instance
///
/// Connections are established lazily by the driver; this validates the
/// URI and credentials configuration, not reachability.
pub async fn connect(config: &GraphConfig) -> Result<Graph> {
    let graph = Graph::new(&config.uri, &config.user, &config.password)
        .await
        .context("Failed to connect to Neo4j")?;

    Ok(graph)
}
