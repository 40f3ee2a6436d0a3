//! Event access checks shared by the event and gift handlers.
//!
//! Wraps the core evaluator with the lookup order the handlers need:
//! resolve the event first (a miss is `NotFound`, never `Forbidden`), build
//! the grants projection from its share rows, then authorize.

use heartboard_core::access::{self, EventAction, EventGrants, ShareGrant, ShareRole};
use heartboard_core::error::CoreError;
use heartboard_core::types::DbId;
use heartboard_db::models::event::{Event, EventShare};
use heartboard_db::repositories::EventRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Build the evaluator's grants projection from an event and its share rows.
///
/// A stored role outside the known set indicates a corrupted row and is
/// surfaced as an internal error rather than silently granting or denying.
pub fn event_grants(event: &Event, shares: &[EventShare]) -> AppResult<EventGrants> {
    let shares = shares
        .iter()
        .map(|s| {
            let role = ShareRole::parse(&s.role).map_err(|_| {
                AppError::Core(CoreError::Internal(format!(
                    "event {} has share with unknown role '{}'",
                    s.event_id, s.role
                )))
            })?;
            Ok(ShareGrant {
                user_id: s.user_id,
                role,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(EventGrants {
        owner_id: event.owner_id,
        shares,
    })
}

/// Resolve an event and verify `user_id` may perform `action` on it.
///
/// Returns the event row together with its share list (the detail endpoint
/// needs both). Fails with `NotFound` when the event is absent and
/// `Forbidden` when the user lacks the required role.
pub async fn fetch_event_authorized(
    pool: &PgPool,
    event_id: DbId,
    user_id: DbId,
    action: EventAction,
) -> AppResult<(Event, Vec<EventShare>)> {
    let event = EventRepo::find_by_id(pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    let shares = EventRepo::list_shares(pool, event_id).await?;
    let grants = event_grants(&event, &shares)?;
    access::authorize(user_id, &grants, action)?;

    Ok((event, shares))
}
