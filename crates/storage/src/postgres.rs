//! PostgreSQL comment store.

mod rows;

use anyhow::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;
use user_stats_models::{count_words, RecentComment};

use self::rows::RecentCommentRow;
use super::{CommentStore, StorageConfig};

/// PostgreSQL-backed comment store.
pub struct PostgresCommentStore {
    pool: PgPool,
}

impl PostgresCommentStore {
    /// Connect and bring the schema up to date.
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Connecting to PostgreSQL database...");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;

        info!("Successfully connected to PostgreSQL");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

        info!("Database migrations completed");

        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests, shared pools).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying database connection pool.
    pub fn get_db_pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl CommentStore for PostgresCommentStore {
    async fn total_comments(&self, user_id: i64) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM comments WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    async fn last_five_comments(&self, user_id: i64) -> Result<Vec<RecentComment>> {
        let rows = sqlx::query_as::<_, RecentCommentRow>(
            r#"
            SELECT c.subject, n.title
            FROM comments c
            JOIN nodes n ON c.node_id = n.id
            WHERE c.user_id = $1
            ORDER BY c.created_at DESC
            LIMIT 5
        "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| RecentComment {
                comment: row.subject,
                title: row.title,
            })
            .collect())
    }

    async fn total_words(&self, user_id: i64) -> Result<i64> {
        // Word counting happens in Rust so both backends share one rule;
        // no node join, orphaned comments included.
        let bodies = sqlx::query_scalar::<_, String>(
            r#"SELECT body FROM comments WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bodies.iter().map(|body| count_words(body)).sum())
    }
}
