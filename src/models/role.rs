//! Role model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role database model
///
/// Roles are reference data: this service never creates, updates or deletes
/// them, it only reads the seeded set and attaches roles to users.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Role {
    pub id: i32,
    pub name: String,
}
