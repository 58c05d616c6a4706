//! Database row structures for PostgreSQL.

use sqlx::FromRow;

/// Row of the recent-comments join: comment subject plus parent node title.
#[derive(Debug, FromRow)]
pub struct RecentCommentRow {
    pub subject: String,
    pub title: String,
}
