//! Filter normalization for the paginated user listing
//!
//! Raw query parameters arrive loosely typed (the role-id set is a
//! comma-delimited string, the sort target is free text). Normalization
//! either produces a fully resolved [`UserQuery`] or rejects the request
//! before any store access; no partially normalized object ever escapes.

use serde::Deserialize;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
};

use super::sort::SortField;

/// Raw query parameters of `GET /users`, as sent by the client
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub order_by: Option<String>,
    pub order_asc: Option<bool>,
    pub name_starts_with: Option<String>,
    pub email_starts_with: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    /// Role ids with comma as delimiter
    pub role_ids: Option<String>,
}

/// Normalized, validated parameters for the user listing query
#[derive(Debug, Clone, PartialEq)]
pub struct UserQuery {
    pub page_number: u32,
    pub page_size: u32,
    pub sort: SortField,
    pub ascending: bool,
    pub name_starts_with: Option<String>,
    pub email_starts_with: Option<String>,
    pub min_age: i32,
    pub max_age: i32,
    pub role_ids: Vec<i32>,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortField::Id,
            ascending: true,
            name_starts_with: None,
            email_starts_with: None,
            min_age: 0,
            max_age: i32::MAX,
            role_ids: Vec::new(),
        }
    }
}

impl UserQuery {
    /// Normalize raw query parameters.
    ///
    /// Fails with [`AppError::InvalidInput`] on a malformed role-id string or
    /// an unrecognized sort target. Page bounds are clamped rather than
    /// rejected: page number to at least 1, page size to `[1, MAX_PAGE_SIZE]`.
    pub fn from_raw(raw: ListUsersQuery) -> AppResult<Self> {
        let role_ids = parse_role_ids(raw.role_ids.as_deref().unwrap_or(""))
            .map_err(AppError::InvalidInput)?;

        let sort = SortField::resolve(raw.order_by.as_deref().unwrap_or(""))
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "Unknown sort field: {}",
                    raw.order_by.as_deref().unwrap_or("")
                ))
            })?;

        Ok(Self {
            page_number: raw.page_number.unwrap_or(1).max(1),
            page_size: raw
                .page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
            sort,
            ascending: raw.order_asc.unwrap_or(true),
            name_starts_with: non_blank(raw.name_starts_with),
            email_starts_with: non_blank(raw.email_starts_with),
            min_age: raw.min_age.unwrap_or(0),
            max_age: raw.max_age.unwrap_or(i32::MAX),
            role_ids,
        })
    }

    /// Number of records to skip for the selected page
    pub fn offset(&self) -> i64 {
        (self.page_number as i64 - 1) * self.page_size as i64
    }

    /// Number of records on a page
    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }
}

/// Treat empty and whitespace-only prefixes as absent
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse a comma-delimited role-id string.
///
/// Blank input means "no role filter". Otherwise every token must parse as an
/// integer; a single bad token rejects the whole string with no partial
/// result. Token order is preserved as written.
fn parse_role_ids(input: &str) -> Result<Vec<i32>, String> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<i32>()
                .map_err(|_| format!("Invalid role id: {token}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_role_ids_mean_no_filter() {
        assert_eq!(parse_role_ids(""), Ok(vec![]));
        assert_eq!(parse_role_ids("   "), Ok(vec![]));
    }

    #[test]
    fn role_ids_parse_in_written_order() {
        assert_eq!(parse_role_ids("3,1,2"), Ok(vec![3, 1, 2]));
        assert_eq!(parse_role_ids(" 4 , 2 "), Ok(vec![4, 2]));
    }

    #[test]
    fn one_bad_token_rejects_the_whole_string() {
        assert!(parse_role_ids("1,x,3").is_err());
        assert!(parse_role_ids("1,,3").is_err());
        assert!(parse_role_ids("1.5").is_err());
    }

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let params = UserQuery::from_raw(ListUsersQuery::default()).unwrap();
        assert_eq!(params, UserQuery::default());
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), DEFAULT_PAGE_SIZE as i64);
    }

    #[test]
    fn page_bounds_are_clamped() {
        let params = UserQuery::from_raw(ListUsersQuery {
            page_number: Some(0),
            page_size: Some(100_000),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params.page_number, 1);
        assert_eq!(params.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn blank_prefixes_are_dropped() {
        let params = UserQuery::from_raw(ListUsersQuery {
            name_starts_with: Some("  ".to_string()),
            email_starts_with: Some("al".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params.name_starts_with, None);
        assert_eq!(params.email_starts_with, Some("al".to_string()));
    }

    #[test]
    fn unknown_sort_target_is_rejected() {
        let result = UserQuery::from_raw(ListUsersQuery {
            order_by: Some("secret".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn sort_target_resolves_case_insensitively() {
        let params = UserQuery::from_raw(ListUsersQuery {
            order_by: Some("aGe".to_string()),
            order_asc: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params.sort, SortField::Age);
        assert!(!params.ascending);
    }

    #[test]
    fn offset_follows_page_number() {
        let params = UserQuery {
            page_number: 3,
            page_size: 10,
            ..Default::default()
        };
        assert_eq!(params.offset(), 20);
    }
}
