//! Sortable user fields
//!
//! The original request interface lets clients name the sort target as free
//! text. The set of sortable fields is small and fixed, so resolution is a
//! closed, case-insensitive lookup from the supplied name to a canonical
//! field, and each field maps statically to its ORDER BY expression.

/// A sortable field of the user entity, in canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Age,
    Email,
    Roles,
}

impl SortField {
    /// All sortable fields with their canonical (stored) names
    const KNOWN: &'static [(&'static str, SortField)] = &[
        ("Id", SortField::Id),
        ("Name", SortField::Name),
        ("Age", SortField::Age),
        ("Email", SortField::Email),
        ("Roles", SortField::Roles),
    ];

    /// Resolve a client-supplied field name, case-insensitively.
    ///
    /// Empty or whitespace-only input falls back to the identity field.
    /// Unrecognized names yield `None`; callers reject the whole request.
    pub fn resolve(name: &str) -> Option<SortField> {
        let name = name.trim();
        if name.is_empty() {
            return Some(SortField::Id);
        }

        Self::KNOWN
            .iter()
            .find(|(canonical, _)| canonical.eq_ignore_ascii_case(name))
            .map(|(_, field)| *field)
    }

    /// The canonical stored name of this field
    pub fn canonical_name(self) -> &'static str {
        Self::KNOWN
            .iter()
            .find(|(_, field)| *field == self)
            .map(|(canonical, _)| *canonical)
            .unwrap_or("Id")
    }

    /// The ORDER BY clause for this field.
    ///
    /// Sorting by roles uses the role count as the primary key and the sum of
    /// role ids as the secondary key, with the direction applied to both.
    /// Every clause ends with an ascending id tiebreak so the ordering is
    /// total and pagination stays deterministic.
    pub(crate) fn order_by_clause(self, ascending: bool) -> String {
        let dir = if ascending { "ASC" } else { "DESC" };
        match self {
            SortField::Id => format!("u.id {dir}"),
            SortField::Name => format!("u.name {dir}, u.id ASC"),
            SortField::Age => format!("u.age {dir}, u.id ASC"),
            SortField::Email => format!("u.email {dir}, u.id ASC"),
            SortField::Roles => format!(
                "(SELECT COUNT(*) FROM user_roles ur WHERE ur.user_id = u.id) {dir}, \
                 (SELECT COALESCE(SUM(ur.role_id), 0) FROM user_roles ur WHERE ur.user_id = u.id) {dir}, \
                 u.id ASC"
            ),
        }
    }
}

impl Default for SortField {
    fn default() -> Self {
        SortField::Id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(SortField::resolve("email"), Some(SortField::Email));
        assert_eq!(SortField::resolve("EMAIL"), Some(SortField::Email));
        assert_eq!(SortField::resolve("eMaIl"), Some(SortField::Email));
    }

    #[test]
    fn resolve_defaults_to_id_on_blank_input() {
        assert_eq!(SortField::resolve(""), Some(SortField::Id));
        assert_eq!(SortField::resolve("   "), Some(SortField::Id));
    }

    #[test]
    fn resolve_rejects_unknown_fields() {
        assert_eq!(SortField::resolve("password"), None);
        assert_eq!(SortField::resolve("id; DROP TABLE users"), None);
    }

    #[test]
    fn resolved_fields_have_stable_canonical_names() {
        for name in ["id", "name", "age", "email", "roles"] {
            let field = SortField::resolve(name).unwrap();
            assert!(field.canonical_name().eq_ignore_ascii_case(name));
            // resolving the canonical name round-trips
            assert_eq!(SortField::resolve(field.canonical_name()), Some(field));
        }
    }

    #[test]
    fn roles_clause_applies_direction_to_both_keys() {
        let clause = SortField::Roles.order_by_clause(false);
        assert_eq!(clause.matches("DESC").count(), 2);
        assert!(clause.ends_with("u.id ASC"));
    }
}
