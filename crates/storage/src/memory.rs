use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use user_stats_models::{count_words, RecentComment};

use super::CommentStore;

/// A comment as held by the in-memory backend.
#[derive(Debug, Clone)]
pub struct CommentRecord {
    pub user_id: i64,
    pub node_id: i64,
    pub subject: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// In-memory comment store.
///
/// Used by tests and storage-less development runs. Mirrors the
/// PostgreSQL backend's semantics, including the inner-join exclusion of
/// comments whose parent node is missing from `nodes`.
#[derive(Default)]
pub struct MemoryCommentStore {
    nodes: tokio::sync::RwLock<HashMap<i64, String>>,
    comments: tokio::sync::RwLock<Vec<CommentRecord>>,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_node(&self, id: i64, title: &str) {
        let mut nodes = self.nodes.write().await;
        nodes.insert(id, title.to_string());
    }

    pub async fn insert_comment(&self, record: CommentRecord) {
        let mut comments = self.comments.write().await;
        comments.push(record);
    }
}

#[async_trait::async_trait]
impl CommentStore for MemoryCommentStore {
    async fn total_comments(&self, user_id: i64) -> Result<i64> {
        let comments = self.comments.read().await;
        Ok(comments.iter().filter(|c| c.user_id == user_id).count() as i64)
    }

    async fn last_five_comments(&self, user_id: i64) -> Result<Vec<RecentComment>> {
        let nodes = self.nodes.read().await;
        let comments = self.comments.read().await;

        let mut owned: Vec<&CommentRecord> = comments
            .iter()
            .filter(|c| c.user_id == user_id && nodes.contains_key(&c.node_id))
            .collect();
        // Stable sort: ties in created_at keep insertion order, matching
        // the database's unspecified-but-stable tiebreak.
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(owned
            .into_iter()
            .take(5)
            .map(|c| RecentComment {
                comment: c.subject.clone(),
                title: nodes[&c.node_id].clone(),
            })
            .collect())
    }

    async fn total_words(&self, user_id: i64) -> Result<i64> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .filter(|c| c.user_id == user_id)
            .map(|c| count_words(&c.body))
            .sum())
    }
}
