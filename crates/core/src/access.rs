//! Event access-control evaluation.
//!
//! The single source of truth for "may user U perform action A on event E".
//! Every handler that touches an event or one of its gifts builds an
//! [`EventGrants`] projection from the event row and its share rows, then
//! calls [`authorize`]. Callers must resolve lookup misses *before* invoking
//! the evaluator: an absent event is `NotFound`, never `Forbidden`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Role granted to a shared member of an event.
///
/// Ordered `Viewer < Editor < Admin`; a higher role satisfies every
/// requirement a lower one does. Stored as lowercase text in Postgres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareRole {
    Viewer,
    Editor,
    Admin,
}

/// All valid share role strings, in rank order.
pub const VALID_SHARE_ROLES: &[&str] = &["viewer", "editor", "admin"];

impl ShareRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ShareRole::Viewer => "viewer",
            ShareRole::Editor => "editor",
            ShareRole::Admin => "admin",
        }
    }

    /// Parse a stored role string, rejecting anything outside the known set.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "viewer" => Ok(ShareRole::Viewer),
            "editor" => Ok(ShareRole::Editor),
            "admin" => Ok(ShareRole::Admin),
            other => Err(CoreError::Validation(format!(
                "Invalid share role '{other}'. Must be one of: {}",
                VALID_SHARE_ROLES.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for ShareRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action gated by event ownership or a share role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    /// View the event or list its gifts.
    View,
    /// Create a gift on the event.
    CreateGift,
    /// Update the event's own fields.
    UpdateEvent,
    /// Update a gift belonging to the event.
    UpdateGift,
    /// Toggle a gift's completion flag.
    ToggleGift,
    /// Share the event with another user.
    Share,
    /// Delete the event (cascades to its gifts).
    DeleteEvent,
    /// Delete a gift belonging to the event.
    DeleteGift,
}

impl EventAction {
    /// Human-readable action name used in denial messages.
    pub fn as_str(self) -> &'static str {
        match self {
            EventAction::View => "view event",
            EventAction::CreateGift => "add gifts to this event",
            EventAction::UpdateEvent => "update this event",
            EventAction::UpdateGift => "update this gift",
            EventAction::ToggleGift => "update this gift",
            EventAction::Share => "share this event",
            EventAction::DeleteEvent => "delete this event",
            EventAction::DeleteGift => "delete this gift",
        }
    }

    /// The minimum share role that satisfies this action, or `None` for
    /// owner-only actions that no share role satisfies regardless of rank.
    fn min_share_role(self) -> Option<ShareRole> {
        match self {
            EventAction::View => Some(ShareRole::Viewer),
            EventAction::CreateGift | EventAction::UpdateGift | EventAction::ToggleGift => {
                Some(ShareRole::Editor)
            }
            EventAction::DeleteGift => Some(ShareRole::Admin),
            EventAction::UpdateEvent | EventAction::Share | EventAction::DeleteEvent => None,
        }
    }
}

/// One entry of an event's share list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareGrant {
    pub user_id: DbId,
    pub role: ShareRole,
}

/// Ownership projection of an event, built from the `events` row and its
/// `event_shares` rows.
#[derive(Debug, Clone)]
pub struct EventGrants {
    pub owner_id: DbId,
    pub shares: Vec<ShareGrant>,
}

impl EventGrants {
    pub fn is_owner(&self, user_id: DbId) -> bool {
        self.owner_id == user_id
    }

    /// The share role held by `user_id`, if any. A user appears at most once.
    pub fn role_of(&self, user_id: DbId) -> Option<ShareRole> {
        self.shares
            .iter()
            .find(|s| s.user_id == user_id)
            .map(|s| s.role)
    }
}

/// Decide whether `user_id` may perform `action` on the event described by
/// `grants`.
///
/// The owner is allowed every action. Non-members are always denied. Shared
/// members are allowed when their role ranks at least the action's minimum;
/// owner-only actions (`UpdateEvent`, `Share`, `DeleteEvent`) are denied for
/// every share role.
pub fn authorize(user_id: DbId, grants: &EventGrants, action: EventAction) -> Result<(), CoreError> {
    if grants.is_owner(user_id) {
        return Ok(());
    }

    let denied = || {
        CoreError::Forbidden(format!(
            "You do not have permission to {}",
            action.as_str()
        ))
    };

    let role = grants.role_of(user_id).ok_or_else(denied)?;

    match action.min_share_role() {
        Some(min) if role >= min => Ok(()),
        _ => Err(denied()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: DbId = 1;
    const MEMBER: DbId = 2;
    const STRANGER: DbId = 3;

    const ALL_ACTIONS: &[EventAction] = &[
        EventAction::View,
        EventAction::CreateGift,
        EventAction::UpdateEvent,
        EventAction::UpdateGift,
        EventAction::ToggleGift,
        EventAction::Share,
        EventAction::DeleteEvent,
        EventAction::DeleteGift,
    ];

    fn grants_with(role: Option<ShareRole>) -> EventGrants {
        EventGrants {
            owner_id: OWNER,
            shares: role
                .map(|role| {
                    vec![ShareGrant {
                        user_id: MEMBER,
                        role,
                    }]
                })
                .unwrap_or_default(),
        }
    }

    #[test]
    fn owner_is_allowed_every_action() {
        // Regardless of what the share list contains.
        let grants = grants_with(Some(ShareRole::Viewer));
        for &action in ALL_ACTIONS {
            assert!(
                authorize(OWNER, &grants, action).is_ok(),
                "owner should be allowed to {action:?}"
            );
        }
    }

    #[test]
    fn non_member_is_denied_every_action() {
        let grants = grants_with(Some(ShareRole::Admin));
        for &action in ALL_ACTIONS {
            let result = authorize(STRANGER, &grants, action);
            assert!(
                matches!(result, Err(CoreError::Forbidden(_))),
                "stranger should be denied {action:?}"
            );
        }
    }

    #[test]
    fn viewer_can_only_view() {
        let grants = grants_with(Some(ShareRole::Viewer));
        assert!(authorize(MEMBER, &grants, EventAction::View).is_ok());
        for &action in ALL_ACTIONS {
            if action == EventAction::View {
                continue;
            }
            assert!(
                authorize(MEMBER, &grants, action).is_err(),
                "viewer should be denied {action:?}"
            );
        }
    }

    #[test]
    fn editor_can_write_gifts_but_not_delete_them() {
        let grants = grants_with(Some(ShareRole::Editor));
        assert!(authorize(MEMBER, &grants, EventAction::View).is_ok());
        assert!(authorize(MEMBER, &grants, EventAction::CreateGift).is_ok());
        assert!(authorize(MEMBER, &grants, EventAction::UpdateGift).is_ok());
        assert!(authorize(MEMBER, &grants, EventAction::ToggleGift).is_ok());
        assert!(authorize(MEMBER, &grants, EventAction::DeleteGift).is_err());
    }

    #[test]
    fn admin_share_can_delete_gifts() {
        let grants = grants_with(Some(ShareRole::Admin));
        assert!(authorize(MEMBER, &grants, EventAction::DeleteGift).is_ok());
    }

    #[test]
    fn owner_only_actions_are_unreachable_by_any_share_role() {
        for role in [ShareRole::Viewer, ShareRole::Editor, ShareRole::Admin] {
            let grants = grants_with(Some(role));
            for action in [
                EventAction::UpdateEvent,
                EventAction::Share,
                EventAction::DeleteEvent,
            ] {
                assert!(
                    authorize(MEMBER, &grants, action).is_err(),
                    "{role} share should be denied {action:?}"
                );
            }
        }
    }

    #[test]
    fn role_monotonicity() {
        // Any action a lower role may perform, every higher role may too.
        let roles = [ShareRole::Viewer, ShareRole::Editor, ShareRole::Admin];
        for (i, &lower) in roles.iter().enumerate() {
            for &higher in &roles[i..] {
                for &action in ALL_ACTIONS {
                    let lower_ok = authorize(MEMBER, &grants_with(Some(lower)), action).is_ok();
                    let higher_ok = authorize(MEMBER, &grants_with(Some(higher)), action).is_ok();
                    if lower_ok {
                        assert!(
                            higher_ok,
                            "{higher} should permit {action:?} since {lower} does"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn denial_message_names_the_action() {
        let grants = grants_with(None);
        let err = authorize(MEMBER, &grants, EventAction::DeleteEvent).unwrap_err();
        assert!(err.to_string().contains("delete this event"));
    }

    #[test]
    fn share_role_parse_round_trip() {
        for &s in VALID_SHARE_ROLES {
            assert_eq!(ShareRole::parse(s).unwrap().as_str(), s);
        }
        assert!(ShareRole::parse("owner").is_err());
        assert!(ShareRole::parse("").is_err());
    }

    #[test]
    fn share_role_ordering() {
        assert!(ShareRole::Viewer < ShareRole::Editor);
        assert!(ShareRole::Editor < ShareRole::Admin);
    }
}
