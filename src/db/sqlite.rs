//! SQLite-backed document store.
//!
//! Documents live in one table as JSON text, scoped by namespace (the
//! configured database name) and collection. The autoincrement `seq` column
//! is the storage identifier, surfaced to projections as `_id`.

use std::str::FromStr;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use super::{Collection, Document, DocumentStore, Projection, INTERNAL_ID};
use crate::errors::AppError;

/// Document store over a SQLite connection pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
    namespace: String,
}

impl SqliteStore {
    /// Open the pool and create the schema. Called once at startup.
    pub async fn connect(url: &str, namespace: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(30));

        // Ensure the parent directory exists
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        run_migrations(&pool).await?;

        Ok(Self {
            pool,
            namespace: namespace.to_string(),
        })
    }

    /// Release the pool. Called once at shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Create the documents table if it doesn't exist.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            namespace TEXT NOT NULL,
            collection TEXT NOT NULL,
            body TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_documents_collection
            ON documents(namespace, collection, seq);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn insert_one(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> Result<(), AppError> {
        document.remove(INTERNAL_ID);
        let body = serde_json::to_string(&document)?;

        sqlx::query("INSERT INTO documents (namespace, collection, body) VALUES (?, ?, ?)")
            .bind(&self.namespace)
            .bind(collection.as_str())
            .bind(&body)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_many(
        &self,
        collection: Collection,
        projection: &Projection,
        limit: usize,
    ) -> Result<Vec<Value>, AppError> {
        let rows = sqlx::query(
            "SELECT seq, body FROM documents WHERE namespace = ? AND collection = ? ORDER BY seq LIMIT ?",
        )
        .bind(&self.namespace)
        .bind(collection.as_str())
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let seq: i64 = row.get("seq");
            let body: String = row.get("body");
            let mut value = match serde_json::from_str::<Value>(&body) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(%collection, seq, "Stored body is not valid JSON: {}", e);
                    Value::String(body)
                }
            };
            if let Value::Object(document) = &mut value {
                document.insert(INTERNAL_ID.to_string(), Value::from(seq));
                projection.apply(document);
            }
            documents.push(value);
        }

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    async fn open(dir: &TempDir, namespace: &str) -> SqliteStore {
        let url = format!("sqlite://{}", dir.path().join("docs.sqlite").display());
        SqliteStore::connect(&url, namespace).await.unwrap()
    }

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_find_in_order() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir, "site").await;

        for name in ["first", "second", "third"] {
            store
                .insert_one(Collection::Team, doc(json!({ "name": name })))
                .await
                .unwrap();
        }

        let found = store
            .find_many(Collection::Team, &Projection::without_internal_id(), 2)
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0]["name"], "first");
        assert_eq!(found[1]["name"], "second");
        assert!(found.iter().all(|d| d.get("_id").is_none()));
    }

    #[tokio::test]
    async fn test_internal_id_visible_without_projection() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir, "site").await;

        store
            .insert_one(Collection::Services, doc(json!({ "_id": "spoofed", "title": "QA" })))
            .await
            .unwrap();

        let found = store
            .find_many(Collection::Services, &Projection::default(), 10)
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert!(found[0]["_id"].is_i64());
    }

    #[tokio::test]
    async fn test_collections_and_namespaces_are_isolated() {
        let dir = TempDir::new().unwrap();
        let site = open(&dir, "site").await;
        let staging = open(&dir, "staging").await;

        site.insert_one(Collection::Testimonials, doc(json!({ "name": "A" })))
            .await
            .unwrap();

        let projection = Projection::without_internal_id();
        assert_eq!(
            site.find_many(Collection::Testimonials, &projection, 100)
                .await
                .unwrap()
                .len(),
            1
        );
        assert!(site
            .find_many(Collection::Resources, &projection, 100)
            .await
            .unwrap()
            .is_empty());
        assert!(staging
            .find_many(Collection::Testimonials, &projection, 100)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_rows_are_returned_raw() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir, "site").await;

        for body in ["[1, 2, 3]", "{ not json"] {
            sqlx::query("INSERT INTO documents (namespace, collection, body) VALUES (?, ?, ?)")
                .bind("site")
                .bind(Collection::Resources.as_str())
                .bind(body)
                .execute(&store.pool)
                .await
                .unwrap();
        }

        let found = store
            .find_many(Collection::Resources, &Projection::without_internal_id(), 10)
            .await
            .unwrap();

        assert_eq!(found, vec![json!([1, 2, 3]), json!("{ not json")]);
    }

    #[tokio::test]
    async fn test_closed_pool_reports_store_unavailable() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir, "site").await;
        store.close().await;

        let err = store
            .find_many(Collection::Team, &Projection::without_internal_id(), 10)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }
}
