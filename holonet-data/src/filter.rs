use sqlx::{QueryBuilder, Sqlite};

use crate::entity::SqlValue;

/// A conjunction of column equality predicates.
///
/// ```ignore
/// let filter = Filter::new().eq("user_id", 1).eq("planet_id", 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(&'static str, SqlValue)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `column = value`, or `column IS NULL` for [`SqlValue::Null`].
    pub fn eq(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.conditions.push((column, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub(crate) fn push_where(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        for (i, (column, value)) in self.conditions.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            qb.push(*column);
            if let SqlValue::Null = value {
                qb.push(" IS NULL");
            } else {
                qb.push(" = ");
                push_value(qb, value);
            }
        }
    }
}

pub(crate) fn push_value(qb: &mut QueryBuilder<'_, Sqlite>, value: &SqlValue) {
    match value {
        SqlValue::Null => qb.push("NULL"),
        SqlValue::Integer(i) => qb.push_bind(*i),
        SqlValue::Text(s) => qb.push_bind(s.clone()),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_conditions_in_order() {
        let filter = Filter::new()
            .eq("user_id", 7i64)
            .eq("kind", "planet")
            .eq("people_id", None::<i64>);
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT id FROM favorites");
        filter.push_where(&mut qb);
        assert_eq!(
            qb.sql(),
            "SELECT id FROM favorites WHERE user_id = ? AND kind = ? AND people_id IS NULL"
        );
    }

    #[test]
    fn empty_filter_renders_nothing() {
        let filter = Filter::new();
        assert!(filter.is_empty());
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT id FROM planets");
        filter.push_where(&mut qb);
        assert_eq!(qb.sql(), "SELECT id FROM planets");
    }
}
