//! User model

use serde::{Deserialize, Serialize};

/// User entity
///
/// Identity lives in an external provider; the `token` is the opaque
/// identifier requests carry and the graph stores on `(:User)` nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub token: String,
    pub username: String,
}
