//! # Database module — hosted Postgres access
//!
//! Entirely gated behind `#[cfg(feature = "server")]` so client (WASM) builds
//! never pull in SQLx or Tokio networking code.
//!
//! - [`get_pool`] — the lazy, process-wide connection pool, opened from
//!   `database.url` in [`Settings`](crate::settings::Settings) on first use.
//! - [`fetch_all`] — the record fetcher: `SELECT * FROM <collection> ORDER BY id DESC`
//!   folded into a [`FetchOutcome`](crate::models::FetchOutcome).

#[cfg(feature = "server")]
mod pool;
#[cfg(feature = "server")]
mod records;

#[cfg(feature = "server")]
pub use pool::{get_pool, DbError};
#[cfg(feature = "server")]
pub use records::{fetch_all, fetch_from, Collection, Record};
