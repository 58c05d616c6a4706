use user_stats_models::{CurrentUser, StatsError, UserStats};
use user_stats_storage::CommentStore;

use crate::resolver::resolve_target;

/// Everything a render needs from the request boundary.
#[derive(Debug, Clone)]
pub struct BlockContext {
    /// Raw `user` route parameter, if the current route carries one.
    pub route_user: Option<String>,
    /// The authenticated (or anonymous) viewer.
    pub current_user: CurrentUser,
}

/// Render the block for one request.
///
/// The three lookups are independent read-only queries, so they run
/// concurrently; a failure in any of them fails the whole render. An
/// unresolvable target short-circuits to the empty payload.
pub async fn render(
    store: &dyn CommentStore,
    ctx: &BlockContext,
) -> Result<UserStats, StatsError> {
    let target = resolve_target(ctx.route_user.as_deref(), &ctx.current_user);
    let Some(uid) = target.uid() else {
        return Ok(UserStats::empty());
    };

    let (total, last_five_comments, total_words) = tokio::try_join!(
        store.total_comments(uid),
        store.last_five_comments(uid),
        store.total_words(uid),
    )?;

    Ok(UserStats {
        total,
        last_five_comments,
        total_words,
    })
}
