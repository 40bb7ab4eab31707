//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Role;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// User with its eagerly loaded role set
#[derive(Debug, Clone, Serialize)]
pub struct UserWithRoles {
    #[serde(flatten)]
    pub user: User,
    pub roles: Vec<Role>,
}

impl UserWithRoles {
    /// Check whether the user already holds the given role (by identity)
    pub fn has_role(&self, role_id: i32) -> bool {
        self.roles.iter().any(|r| r.id == role_id)
    }

    /// The user's highest-privilege role, defined as the role with the
    /// largest id (ids are seeded in ascending order of privilege)
    pub fn highest_role(&self) -> Option<&Role> {
        self.roles.iter().max_by_key(|r| r.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserWithRoles {
        UserWithRoles {
            user: User {
                id: 1,
                name: "Alice".to_string(),
                age: 30,
                email: "alice@example.com".to_string(),
            },
            roles: vec![
                Role { id: 1, name: "User".to_string() },
                Role { id: 3, name: "Support".to_string() },
            ],
        }
    }

    #[test]
    fn has_role_matches_by_id() {
        let user = sample();
        assert!(user.has_role(3));
        assert!(!user.has_role(2));
    }

    #[test]
    fn highest_role_is_max_by_id() {
        let user = sample();
        assert_eq!(user.highest_role().map(|r| r.name.as_str()), Some("Support"));
    }
}
