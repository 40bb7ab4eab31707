//! SQL assembly for the filtered, sorted, paginated user listing
//!
//! The list and count statements share one WHERE clause so the total record
//! count is always computed over the filtered but unpaginated set. Only the
//! list statement carries ORDER BY, OFFSET and LIMIT. All client-supplied
//! values enter as bind parameters; the ORDER BY text comes from the closed
//! [`SortField`](super::sort::SortField) mapping, never from raw input.

use sqlx::{Postgres, QueryBuilder};

use super::filter::UserQuery;

/// Build the SELECT returning one page of users.
///
/// `role_ids` must already be resolved against the roles table (unknown ids
/// dropped, duplicates collapsed); the role filter keeps a user only when it
/// holds every one of them, extra roles permitting (superset semantics).
pub fn build_list_query(params: &UserQuery, role_ids: &[i32]) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT u.id, u.name, u.age, u.email FROM users u");
    push_filters(&mut qb, params, role_ids);

    qb.push(" ORDER BY ");
    qb.push(params.sort.order_by_clause(params.ascending));

    qb.push(" OFFSET ");
    qb.push_bind(params.offset());
    qb.push(" LIMIT ");
    qb.push_bind(params.limit());

    qb
}

/// Build the COUNT over the same filtered set, before pagination
pub fn build_count_query(params: &UserQuery, role_ids: &[i32]) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM users u");
    push_filters(&mut qb, params, role_ids);
    qb
}

fn push_filters(qb: &mut QueryBuilder<'static, Postgres>, params: &UserQuery, role_ids: &[i32]) {
    qb.push(" WHERE u.age >= ");
    qb.push_bind(params.min_age);
    qb.push(" AND u.age <= ");
    qb.push_bind(params.max_age);

    if let Some(prefix) = &params.name_starts_with {
        qb.push(" AND position(lower(");
        qb.push_bind(prefix.clone());
        qb.push(") in lower(u.name)) = 1");
    }

    if let Some(prefix) = &params.email_starts_with {
        qb.push(" AND position(lower(");
        qb.push_bind(prefix.clone());
        qb.push(") in lower(u.email)) = 1");
    }

    if !role_ids.is_empty() {
        // (user_id, role_id) is the join table's primary key, so the
        // correlated count equals the requested set size exactly when the
        // user holds every requested role
        qb.push(" AND (SELECT COUNT(*) FROM user_roles ur WHERE ur.user_id = u.id AND ur.role_id = ANY(");
        qb.push_bind(role_ids.to_vec());
        qb.push(")) = ");
        qb.push_bind(role_ids.len() as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::sort::SortField;

    #[test]
    fn list_query_with_defaults_has_no_prefix_or_role_clauses() {
        let qb = build_list_query(&UserQuery::default(), &[]);
        let sql = qb.sql();
        assert!(sql.starts_with("SELECT u.id, u.name, u.age, u.email FROM users u"));
        assert!(sql.contains("u.age >= $1 AND u.age <= $2"));
        assert!(!sql.contains("position"));
        assert!(!sql.contains("user_roles ur"));
        assert!(sql.contains("ORDER BY u.id ASC"));
        assert!(sql.contains("OFFSET $3 LIMIT $4"));
    }

    #[test]
    fn count_query_never_paginates() {
        let params = UserQuery {
            page_number: 7,
            page_size: 25,
            ..Default::default()
        };
        let qb = build_count_query(&params, &[1, 2]);
        let sql = qb.sql();
        assert!(sql.starts_with("SELECT COUNT(*) FROM users u"));
        assert!(!sql.contains("ORDER BY"));
        assert!(!sql.contains("OFFSET"));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn list_and_count_share_the_filter_clause() {
        let params = UserQuery {
            name_starts_with: Some("al".to_string()),
            email_starts_with: Some("al@".to_string()),
            role_ids: vec![1, 2],
            ..Default::default()
        };
        let list_sql = build_list_query(&params, &[1, 2]).sql().to_string();
        let count_sql = build_count_query(&params, &[1, 2]).sql().to_string();

        let list_where = list_sql
            .split(" ORDER BY")
            .next()
            .and_then(|s| s.split_once(" WHERE "))
            .map(|(_, w)| w.to_string())
            .unwrap();
        let count_where = count_sql
            .split_once(" WHERE ")
            .map(|(_, w)| w.to_string())
            .unwrap();
        assert_eq!(list_where, count_where);
    }

    #[test]
    fn prefix_filters_compare_from_the_first_character() {
        let params = UserQuery {
            name_starts_with: Some("Al".to_string()),
            ..Default::default()
        };
        let sql = build_list_query(&params, &[]).sql().to_string();
        assert!(sql.contains("position(lower($3) in lower(u.name)) = 1"));
    }

    #[test]
    fn role_filter_requires_the_full_requested_set() {
        let sql = build_list_query(&UserQuery::default(), &[2, 4]).sql().to_string();
        assert!(sql.contains("ur.role_id = ANY($3)"));
        assert!(sql.contains(")) = $4"));
    }

    #[test]
    fn descending_roles_sort_orders_by_count_then_id_sum() {
        let params = UserQuery {
            sort: SortField::Roles,
            ascending: false,
            ..Default::default()
        };
        let sql = build_list_query(&params, &[]).sql().to_string();
        let order_by = sql.split(" ORDER BY ").nth(1).unwrap();
        assert!(order_by.contains("COUNT(*) FROM user_roles ur WHERE ur.user_id = u.id) DESC"));
        assert!(order_by.contains("SUM(ur.role_id), 0) FROM user_roles ur WHERE ur.user_id = u.id) DESC"));
    }
}
