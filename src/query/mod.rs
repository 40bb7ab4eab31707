//! Paginated user query construction
//!
//! Raw request parameters flow through [`filter`] into a normalized
//! [`UserQuery`], which [`builder`] turns into the list and count SQL
//! statements executed by the user repository.

pub mod builder;
pub mod filter;
pub mod sort;

pub use filter::{ListUsersQuery, UserQuery};
pub use sort::SortField;
