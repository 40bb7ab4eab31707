//! User response DTOs

use serde::Serialize;

use crate::models::{Role, UserWithRoles};

/// User with roles as returned to clients
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub roles: Vec<Role>,
}

impl From<UserWithRoles> for UserResponse {
    fn from(user: UserWithRoles) -> Self {
        Self {
            id: user.user.id,
            name: user.user.name,
            age: user.user.age,
            email: user.user.email,
            roles: user.roles,
        }
    }
}

/// One page of users plus the pre-pagination total
#[derive(Debug, Serialize)]
pub struct PagedUsersResponse {
    pub data: Vec<UserResponse>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_records: i64,
}
