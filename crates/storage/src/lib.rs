use anyhow::Result;
use user_stats_models::RecentComment;

mod config;
pub use config::*;

mod memory;
pub use memory::*;

mod postgres;
pub use postgres::*;

/// Read-only comment statistics store.
///
/// All three lookups are independent aggregations over the same comment
/// table; none of them writes. A store error must propagate — the block
/// defines no partial or degraded output.
#[async_trait::async_trait]
pub trait CommentStore: Send + Sync {
    /// Number of comments owned by `user_id`, with no join against the
    /// parent node: comments whose node was deleted are still counted.
    async fn total_comments(&self, user_id: i64) -> Result<i64>;

    /// The user's five most recent comments joined to their parent node
    /// titles, newest first. Inner-join semantics: a comment whose node
    /// no longer exists is excluded here even though `total_comments`
    /// counts it.
    async fn last_five_comments(&self, user_id: i64) -> Result<Vec<RecentComment>>;

    /// Sum of whitespace-delimited word counts over all of the user's
    /// comment bodies, orphaned comments included.
    async fn total_words(&self, user_id: i64) -> Result<i64>;
}
