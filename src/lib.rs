//! TasteIt - A recipe sharing platform backend
//!
//! This library provides the core functionality for the TasteIt backend:
//! automatic tag derivation from recipe text and aggregate rating
//! recomputation, layered over a Neo4j graph store.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
