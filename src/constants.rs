//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in seconds
pub const DEFAULT_JWT_EXPIRY_SECONDS: i64 = 180;

// =============================================================================
// USER ROLES
// =============================================================================

/// Role names as seeded by the initial migration
pub mod roles {
    pub const USER: &str = "User";
    pub const ADMIN: &str = "Admin";
    pub const SUPPORT: &str = "Support";
    pub const SUPER_ADMIN: &str = "SuperAdmin";

    /// Roles allowed to delete users
    pub const DELETERS: &[&str] = &[ADMIN, SUPER_ADMIN];

    /// Roles allowed to create, update and assign roles to users
    pub const EDITORS: &[&str] = &[ADMIN, SUPER_ADMIN, SUPPORT];
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
