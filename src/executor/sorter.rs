//! Result sorting for query execution
//!
//! Sorts surviving rows by one field. The sort is stable: rows with equal
//! keys keep their filtered order in both directions.

use std::cmp::Ordering;

use crate::error::{QueryError, QueryResult};
use crate::planner::{BoundSort, SortDirection};
use crate::value::Value;

use super::boundary::contain;

/// Sorts rows by a resolved sort key
pub(crate) struct ResultSorter;

impl ResultSorter {
    /// Extracts each row's key once, then sorts.
    ///
    /// Keys must all share one tag; mixed tags fail with a type mismatch.
    pub(crate) fn sort<R>(rows: Vec<R>, sort: &BoundSort<'_, R>) -> QueryResult<Vec<R>> {
        let mut keyed = Vec::with_capacity(rows.len());
        for row in rows {
            let key = contain(&sort.field, || sort.extractor.extract(&row))?;
            keyed.push((key, row));
        }

        Self::check_uniform(&keyed, &sort.field)?;

        keyed.sort_by(|(a, _), (b, _)| {
            let ordering = a.sort_cmp(b).unwrap_or(Ordering::Equal);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        Ok(keyed.into_iter().map(|(_, row)| row).collect())
    }

    fn check_uniform<R>(keyed: &[(Value, R)], field: &str) -> QueryResult<()> {
        let Some((first, _)) = keyed.first() else {
            return Ok(());
        };

        match keyed.iter().find(|(key, _)| key.kind() != first.kind()) {
            Some((other, _)) => Err(QueryError::type_mismatch(format!(
                "cannot order by '{}': found both {} and {} values",
                field,
                first.kind(),
                other.kind()
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryErrorCode;
    use crate::schema::FieldExtractor;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        age: f64,
    }

    fn row(id: &'static str, age: f64) -> Row {
        Row { id, age }
    }

    fn age(r: &Row) -> Value {
        Value::number(r.age)
    }

    fn by<'r>(extractor: &'r dyn FieldExtractor<Row>, direction: SortDirection) -> BoundSort<'r, Row> {
        BoundSort {
            field: "age".into(),
            extractor,
            direction,
        }
    }

    fn ids(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let rows = vec![row("c", 30.0), row("a", 20.0), row("b", 25.0)];
        let sorted = ResultSorter::sort(rows, &by(&age, SortDirection::Asc)).unwrap();
        assert_eq!(ids(&sorted), ["a", "b", "c"]);
    }

    #[test]
    fn test_sort_descending() {
        let rows = vec![row("c", 30.0), row("a", 20.0), row("b", 25.0)];
        let sorted = ResultSorter::sort(rows, &by(&age, SortDirection::Desc)).unwrap();
        assert_eq!(ids(&sorted), ["c", "b", "a"]);
    }

    #[test]
    fn test_sort_stable_both_directions() {
        let rows = vec![row("a", 25.0), row("x", 30.0), row("b", 25.0), row("c", 25.0)];

        let asc = ResultSorter::sort(rows.clone(), &by(&age, SortDirection::Asc)).unwrap();
        assert_eq!(ids(&asc), ["a", "b", "c", "x"]);

        let desc = ResultSorter::sort(rows, &by(&age, SortDirection::Desc)).unwrap();
        assert_eq!(ids(&desc), ["x", "a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_string() {
        let name = |r: &Row| Value::string(r.id);
        let rows = vec![row("charlie", 0.0), row("alice", 0.0), row("bob", 0.0)];
        let sorted = ResultSorter::sort(rows, &by(&name, SortDirection::Asc)).unwrap();
        assert_eq!(ids(&sorted), ["alice", "bob", "charlie"]);
    }

    #[test]
    fn test_mixed_key_tags_fail() {
        let mixed = |r: &Row| {
            if r.age > 0.0 {
                Value::number(r.age)
            } else {
                Value::string(r.id)
            }
        };
        let rows = vec![row("a", 1.0), row("b", 0.0)];
        let err = ResultSorter::sort(rows, &by(&mixed, SortDirection::Asc)).unwrap_err();
        assert_eq!(err.code(), QueryErrorCode::TypeMismatch);
    }

    #[test]
    fn test_empty_input() {
        let sorted = ResultSorter::sort(Vec::<Row>::new(), &by(&age, SortDirection::Desc)).unwrap();
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_key_extractor_panic_contained() {
        let bad = |_: &Row| -> Value { panic!("no key") };
        let err = ResultSorter::sort(vec![row("a", 1.0)], &by(&bad, SortDirection::Asc)).unwrap_err();
        assert_eq!(err.code(), QueryErrorCode::EvaluationPanic);
    }
}
