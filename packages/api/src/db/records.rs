//! Collection reads for the list pages.

use std::fmt;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use tracing::{info, warn};

use super::pool::{get_pool, DbError};
use crate::models::{FetchOutcome, Profile, ProfileRow, Species, SpeciesRow};

/// A named table in the hosted store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Profiles,
    Species,
}

impl Collection {
    pub fn table(self) -> &'static str {
        match self {
            Collection::Profiles => "profiles",
            Collection::Species => "species",
        }
    }

    /// Whole collection, newest id first. No filter, no pagination.
    pub fn select_all(self) -> &'static str {
        match self {
            Collection::Profiles => "SELECT * FROM profiles ORDER BY id DESC",
            Collection::Species => "SELECT * FROM species ORDER BY id DESC",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

/// A database row type backed by one [`Collection`].
pub trait Record: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const COLLECTION: Collection;

    /// Client-safe projection of the row.
    type Info;

    fn to_info(&self) -> Self::Info;
}

impl Record for SpeciesRow {
    const COLLECTION: Collection = Collection::Species;
    type Info = Species;

    fn to_info(&self) -> Species {
        SpeciesRow::to_info(self)
    }
}

impl Record for ProfileRow {
    const COLLECTION: Collection = Collection::Profiles;
    type Info = Profile;

    fn to_info(&self) -> Profile {
        ProfileRow::to_info(self)
    }
}

/// Read a whole collection through the shared pool.
///
/// Never fails: a pool or query error becomes [`FetchOutcome::Failed`].
pub async fn fetch_all<R: Record>() -> FetchOutcome<R::Info> {
    match get_pool().await {
        Ok(pool) => fetch_from::<R>(pool).await,
        Err(e) => report::<R::Info>(R::COLLECTION, Err(e)),
    }
}

/// Read a whole collection through the given pool.
pub async fn fetch_from<R: Record>(pool: &PgPool) -> FetchOutcome<R::Info> {
    let rows: Result<Vec<R::Info>, DbError> = sqlx::query_as::<_, R>(R::COLLECTION.select_all())
        .fetch_all(pool)
        .await
        .map(|rows| rows.iter().map(R::to_info).collect())
        .map_err(DbError::from);

    report(R::COLLECTION, rows)
}

fn report<T>(collection: Collection, rows: Result<Vec<T>, DbError>) -> FetchOutcome<T> {
    match &rows {
        Ok(rows) => info!(%collection, count = rows.len(), "Fetched collection"),
        Err(e) => warn!(%collection, error = %e, "Fetch failed, rendering an empty list"),
    }
    rows.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_order_by_id_descending() {
        assert_eq!(
            Collection::Species.select_all(),
            "SELECT * FROM species ORDER BY id DESC"
        );
        assert_eq!(
            Collection::Profiles.select_all(),
            "SELECT * FROM profiles ORDER BY id DESC"
        );
    }

    #[test]
    fn records_name_their_collection() {
        assert_eq!(<SpeciesRow as Record>::COLLECTION, Collection::Species);
        assert_eq!(<ProfileRow as Record>::COLLECTION.to_string(), "profiles");
    }

    #[test]
    fn errors_fold_into_failed_outcome() {
        let outcome = report::<Species>(
            Collection::Species,
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut)),
        );
        assert!(outcome.rows().is_empty());
        assert!(outcome.failure().unwrap().contains("pool timed out"));
    }
}
