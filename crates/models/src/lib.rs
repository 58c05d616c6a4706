use serde::{Deserialize, Serialize};

pub mod errors;
pub mod words;

pub use errors::*;
pub use words::count_words;

/// Guest account id used by the host system for anonymous visitors.
pub const ANONYMOUS_UID: i64 = 0;

/// Identity of the visitor making the current request.
///
/// Produced at the request boundary (auth middleware) and threaded
/// explicitly into the block; there are no ambient current-user lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub authenticated: bool,
}

impl CurrentUser {
    pub fn authenticated(id: i64) -> Self {
        Self {
            id,
            authenticated: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            id: ANONYMOUS_UID,
            authenticated: false,
        }
    }
}

/// One entry of the recent-comments view: the comment's subject line
/// paired with the title of the content item it was posted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentComment {
    pub comment: String,
    pub title: String,
}

/// The rendered block payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total: i64,
    pub last_five_comments: Vec<RecentComment>,
    pub total_words: i64,
}

impl UserStats {
    /// Payload for a target with no comments (or an unresolvable target).
    pub fn empty() -> Self {
        Self {
            total: 0,
            last_five_comments: Vec::new(),
            total_words: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_user_is_guest_id() {
        let user = CurrentUser::anonymous();
        assert_eq!(user.id, ANONYMOUS_UID);
        assert!(!user.authenticated);
    }

    #[test]
    fn empty_stats_are_all_zero() {
        let stats = UserStats::empty();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.total_words, 0);
        assert!(stats.last_five_comments.is_empty());
    }

    #[test]
    fn payload_field_names_are_stable() {
        let stats = UserStats {
            total: 2,
            last_five_comments: vec![RecentComment {
                comment: "nice post".to_string(),
                title: "Hello".to_string(),
            }],
            total_words: 9,
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["total_words"], 9);
        assert_eq!(value["last_five_comments"][0]["comment"], "nice post");
        assert_eq!(value["last_five_comments"][0]["title"], "Hello");
    }
}
