//! Database layer
//!
//! This module provides access to the Neo4j graph store that backs the
//! TasteIt backend. Recipes and users are nodes; comments, likes, and
//! ownership are relationships between them.
//!
//! The store is reached through a single shared `neo4rs::Graph` handle,
//! cloned into each repository. The handle is safe for concurrent use per
//! the driver's contract; no additional locking is layered on top.

pub mod graph;
pub mod repositories;

pub use graph::connect;
