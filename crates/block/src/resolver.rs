use user_stats_models::CurrentUser;

/// The user whose statistics a render targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetUser {
    /// Taken verbatim from the route parameter, unvalidated.
    Route(String),
    /// The viewer themselves, from the request context.
    Current(i64),
}

impl TargetUser {
    /// The user id to query, if the target names one.
    ///
    /// Route values are parsed here rather than at the routing layer; a
    /// value that is not a valid id yields `None` and the render falls
    /// through to the empty payload instead of reaching the store.
    pub fn uid(&self) -> Option<i64> {
        match self {
            TargetUser::Route(raw) => raw.parse().ok(),
            TargetUser::Current(id) => Some(*id),
        }
    }
}

/// Resolve the target user for a render.
///
/// A route parameter always wins, carried unchanged; without one the
/// viewer is the target. An anonymous viewer resolves to the guest id,
/// and the queries then come back empty rather than erroring.
pub fn resolve_target(route_param: Option<&str>, current: &CurrentUser) -> TargetUser {
    match route_param {
        Some(raw) => TargetUser::Route(raw.to_string()),
        None => TargetUser::Current(current.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_stats_models::ANONYMOUS_UID;

    #[test]
    fn no_route_param_targets_the_viewer() {
        let viewer = CurrentUser::authenticated(17);
        assert_eq!(resolve_target(None, &viewer), TargetUser::Current(17));
        assert_eq!(resolve_target(None, &viewer).uid(), Some(17));
    }

    #[test]
    fn route_param_wins_regardless_of_viewer() {
        let viewer = CurrentUser::authenticated(17);
        let target = resolve_target(Some("42"), &viewer);
        assert_eq!(target, TargetUser::Route("42".to_string()));
        assert_eq!(target.uid(), Some(42));
    }

    #[test]
    fn anonymous_viewer_without_param_is_the_guest() {
        let target = resolve_target(None, &CurrentUser::anonymous());
        assert_eq!(target.uid(), Some(ANONYMOUS_UID));
    }

    #[test]
    fn malformed_route_param_is_kept_verbatim_but_yields_no_uid() {
        let viewer = CurrentUser::authenticated(17);
        let target = resolve_target(Some("not-a-user"), &viewer);
        assert_eq!(target, TargetUser::Route("not-a-user".to_string()));
        assert_eq!(target.uid(), None);
        // Whitespace is not trimmed either; the value flows as supplied.
        assert_eq!(resolve_target(Some(" 42"), &viewer).uid(), None);
    }
}
