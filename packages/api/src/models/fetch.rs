//! Tagged result of reading a collection.

use serde::{Deserialize, Serialize};

/// Outcome of reading one collection from the store.
///
/// `Rows` may be empty. `Failed` carries the cause so a caller can choose to
/// surface it; pages that do not care use [`FetchOutcome::rows`], which treats a
/// failure as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FetchOutcome<T> {
    Rows(Vec<T>),
    Failed(String),
}

impl<T> FetchOutcome<T> {
    /// Rows on success, an empty slice on failure.
    pub fn rows(&self) -> &[T] {
        match self {
            FetchOutcome::Rows(rows) => rows,
            FetchOutcome::Failed(_) => &[],
        }
    }

    /// Consume into rows, mapping a failure to an empty list.
    pub fn rows_or_empty(self) -> Vec<T> {
        match self {
            FetchOutcome::Rows(rows) => rows,
            FetchOutcome::Failed(_) => Vec::new(),
        }
    }

    /// The failure cause, if the read failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchOutcome::Rows(_) => None,
            FetchOutcome::Failed(cause) => Some(cause),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Rows(rows) => FetchOutcome::Rows(rows.into_iter().map(f).collect()),
            FetchOutcome::Failed(cause) => FetchOutcome::Failed(cause),
        }
    }
}

impl<T> Default for FetchOutcome<T> {
    fn default() -> Self {
        FetchOutcome::Rows(Vec::new())
    }
}

impl<T, E: std::fmt::Display> From<Result<Vec<T>, E>> for FetchOutcome<T> {
    fn from(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(rows) => FetchOutcome::Rows(rows),
            Err(e) => FetchOutcome::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_reads_as_empty() {
        let outcome: FetchOutcome<i64> = Err::<Vec<i64>, _>("connection refused").into();
        assert!(outcome.rows().is_empty());
        assert_eq!(outcome.failure(), Some("connection refused"));
        assert!(outcome.rows_or_empty().is_empty());
    }

    #[test]
    fn zero_rows_is_not_a_failure() {
        let outcome: FetchOutcome<i64> = Ok::<_, String>(Vec::new()).into();
        assert_eq!(outcome, FetchOutcome::Rows(Vec::new()));
        assert_eq!(outcome.failure(), None);
    }

    #[test]
    fn map_keeps_order() {
        let outcome = FetchOutcome::Rows(vec![3, 2, 1]).map(|n| n * 10);
        assert_eq!(outcome.rows(), &[30, 20, 10]);

        let failed: FetchOutcome<i32> = FetchOutcome::Failed("boom".into());
        assert_eq!(failed.map(|n| n + 1).failure(), Some("boom"));
    }
}
