// src/store.rs

use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::result::QuizResult;

/// Raised when the backing datastore cannot be reached or a statement
/// fails. Kept distinct from "no rows" so callers never mistake an
/// outage for an empty history.
#[derive(Debug)]
pub struct StorageUnavailable(pub String);

impl fmt::Display for StorageUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage unavailable: {}", self.0)
    }
}

impl std::error::Error for StorageUnavailable {}

impl From<sqlx::Error> for StorageUnavailable {
    fn from(err: sqlx::Error) -> Self {
        StorageUnavailable(err.to_string())
    }
}

/// Append-only log of scored submissions.
///
/// Implementations must assign strictly increasing ids and must not
/// acknowledge `record` before the write is durable.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Inserts a new row and returns it with its assigned id.
    async fn record(
        &self,
        name: &str,
        score: i64,
        total: i64,
        percentage: f64,
    ) -> Result<QuizResult, StorageUnavailable>;

    /// Returns up to `limit` most recent rows, newest first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<QuizResult>, StorageUnavailable>;
}

/// Creates the results table if it does not exist yet. Safe to run on
/// every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StorageUnavailable> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS results (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            score BIGINT NOT NULL,
            total BIGINT NOT NULL,
            percentage DOUBLE PRECISION NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Postgres-backed result store. Id assignment and insert atomicity are
/// delegated to the database sequence; no in-process locking.
#[derive(Clone)]
pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn record(
        &self,
        name: &str,
        score: i64,
        total: i64,
        percentage: f64,
    ) -> Result<QuizResult, StorageUnavailable> {
        let row = sqlx::query_as::<_, QuizResult>(
            r#"
            INSERT INTO results (name, score, total, percentage)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, score, total, percentage
            "#,
        )
        .bind(name)
        .bind(score)
        .bind(total)
        .bind(percentage)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<QuizResult>, StorageUnavailable> {
        let rows = sqlx::query_as::<_, QuizResult>(
            r#"
            SELECT id, name, score, total, percentage
            FROM results
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// In-memory result store for tests and database-free runs of the HTTP
/// layer. `set_unavailable(true)` makes both operations fail the way a
/// downed database would.
#[derive(Default)]
pub struct MemoryResultStore {
    rows: Mutex<Vec<QuizResult>>,
    unavailable: AtomicBool,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StorageUnavailable> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageUnavailable("simulated outage".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ResultStore for MemoryResultStore {
    async fn record(
        &self,
        name: &str,
        score: i64,
        total: i64,
        percentage: f64,
    ) -> Result<QuizResult, StorageUnavailable> {
        self.check_available()?;

        let mut rows = self.rows.lock().unwrap();
        let id = rows.last().map(|r| r.id + 1).unwrap_or(1);
        let row = QuizResult {
            id,
            name: name.to_string(),
            score,
            total,
            percentage,
        };
        rows.push(row.clone());

        Ok(row)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<QuizResult>, StorageUnavailable> {
        self.check_available()?;

        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .rev()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_assigns_increasing_ids() {
        let store = MemoryResultStore::new();

        let first = store.record("Ada", 5, 5, 100.0).await.unwrap();
        let second = store.record("Grace", 3, 5, 60.0).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_record_round_trip() {
        let store = MemoryResultStore::new();

        let written = store.record("Ada", 4, 5, 80.0).await.unwrap();
        let read = store.list_recent(20).await.unwrap();

        assert_eq!(read.len(), 1);
        assert_eq!(read[0].id, written.id);
        assert_eq!(read[0].name, "Ada");
        assert_eq!(read[0].score, 4);
        assert_eq!(read[0].total, 5);
        assert_eq!(read[0].percentage, 80.0);
    }

    #[tokio::test]
    async fn test_list_recent_is_newest_first_and_capped() {
        let store = MemoryResultStore::new();
        for i in 0..25_i64 {
            store.record("P", i, 25, 0.0).await.unwrap();
        }

        let rows = store.list_recent(20).await.unwrap();
        assert_eq!(rows.len(), 20);
        for pair in rows.windows(2) {
            assert!(pair[0].id > pair[1].id);
        }
        // The newest row comes back first.
        assert_eq!(rows[0].score, 24);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_both_operations() {
        let store = MemoryResultStore::new();
        store.set_unavailable(true);

        assert!(store.record("Ada", 5, 5, 100.0).await.is_err());
        assert!(store.list_recent(20).await.is_err());

        store.set_unavailable(false);
        assert!(store.list_recent(20).await.unwrap().is_empty());
    }
}
