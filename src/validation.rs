//! Business-rule validation for mutating operations
//!
//! Rules run as a batch: every rule is evaluated and every failure collected
//! before reporting, so a client sees the complete error set at once instead
//! of one failure per round trip. Cross-entity rules (email uniqueness, role
//! referential validity) take read-only access to the store; the database
//! unique index on email stays the authoritative guard against races.

use sqlx::PgPool;
use validator::ValidateEmail;

use crate::{
    db::repositories::{RoleRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::{auth::request::LoginPayload, users::request::UserPayload},
};

/// Field-level violations that need no store access.
///
/// A present-but-empty name passes; only a missing name is rejected.
pub fn user_field_violations(payload: &UserPayload) -> Vec<String> {
    let mut violations = Vec::new();

    match payload.age {
        None => violations.push("Age must not be empty".to_string()),
        Some(age) if age <= 0 => violations.push("Age must be positive".to_string()),
        _ => {}
    }

    if payload.name.is_none() {
        violations.push("Name must not be empty".to_string());
    }

    match &payload.email {
        None => violations.push("Email address must not be empty".to_string()),
        Some(email) if !email.validate_email() => {
            violations.push("Wrong email format".to_string());
        }
        _ => {}
    }

    if payload.roles.as_ref().is_none_or(|roles| roles.is_empty()) {
        violations.push("User must have at least one role".to_string());
    }

    violations
}

/// Validate a create/update payload, collecting field and cross-entity
/// violations into one batch.
///
/// `existing_id` names the user being updated; a user may keep their own
/// email, so a uniqueness hit against that id does not count as a violation.
pub async fn validate_user(
    pool: &PgPool,
    payload: &UserPayload,
    existing_id: Option<i32>,
) -> AppResult<()> {
    let mut violations = user_field_violations(payload);

    if let Some(email) = &payload.email {
        if let Some(found) = UserRepository::find_by_email(pool, email).await? {
            if existing_id != Some(found.id) {
                violations.push("This email address is already taken".to_string());
            }
        }
    }

    if let Some(roles) = &payload.roles {
        if !roles.is_empty() {
            let existing = RoleRepository::find_existing_ids(pool, roles).await?;
            if roles.iter().any(|id| !existing.contains(id)) {
                violations.push("Roles ids are invalid".to_string());
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationFailed(violations))
    }
}

/// Validate login credentials before the user lookup
pub fn validate_login(payload: &LoginPayload) -> AppResult<()> {
    let mut violations = Vec::new();

    if payload.name.is_none() {
        violations.push("Name must not be empty".to_string());
    }

    match &payload.email {
        None => violations.push("Email address must not be empty".to_string()),
        Some(email) if !email.validate_email() => {
            violations.push("Wrong email format".to_string());
        }
        _ => {}
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationFailed(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> UserPayload {
        UserPayload {
            name: Some("Alice".to_string()),
            age: Some(30),
            email: Some("alice@example.com".to_string()),
            roles: Some(vec![1]),
        }
    }

    #[test]
    fn valid_payload_has_no_field_violations() {
        assert!(user_field_violations(&valid_payload()).is_empty());
    }

    #[test]
    fn all_failures_are_collected_not_just_the_first() {
        let payload = UserPayload {
            name: None,
            age: Some(0),
            email: Some("not-an-email".to_string()),
            roles: Some(vec![]),
        };
        let violations = user_field_violations(&payload);
        assert_eq!(violations.len(), 4);
        assert!(violations.iter().any(|v| v.contains("Age")));
        assert!(violations.iter().any(|v| v.contains("Name")));
        assert!(violations.iter().any(|v| v.contains("email format")));
        assert!(violations.iter().any(|v| v.contains("role")));
    }

    #[test]
    fn empty_but_present_name_passes() {
        let payload = UserPayload {
            name: Some(String::new()),
            ..valid_payload()
        };
        assert!(user_field_violations(&payload).is_empty());
    }

    #[test]
    fn missing_age_and_negative_age_are_both_rejected() {
        let missing = UserPayload { age: None, ..valid_payload() };
        assert!(!user_field_violations(&missing).is_empty());

        let negative = UserPayload { age: Some(-3), ..valid_payload() };
        assert!(!user_field_violations(&negative).is_empty());
    }

    #[test]
    fn login_requires_name_and_well_formed_email() {
        let ok = LoginPayload {
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
        };
        assert!(validate_login(&ok).is_ok());

        let bad = LoginPayload { name: None, email: Some("nope".to_string()) };
        match validate_login(&bad) {
            Err(AppError::ValidationFailed(violations)) => assert_eq!(violations.len(), 2),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
