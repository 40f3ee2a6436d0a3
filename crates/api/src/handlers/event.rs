//! Handlers for the `/events` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use heartboard_core::access::{EventAction, ShareRole};
use heartboard_core::error::CoreError;
use heartboard_core::event as event_rules;
use heartboard_core::types::DbId;
use heartboard_db::models::event::{
    CreateEvent, Event, EventListFilter, EventShare, EventSort, EventWithStats, UpdateEvent,
};
use heartboard_db::repositories::{EventRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::access::fetch_event_authorized;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters accepted by the event list endpoint.
///
/// `status`/`category` accept the literal `all` as "no filter", matching the
/// frontend's filter dropdowns.
#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort: EventSort,
}

impl ListEventsQuery {
    fn into_filter(self) -> EventListFilter {
        let drop_all = |v: Option<String>| v.filter(|s| s != "all" && !s.is_empty());
        EventListFilter {
            status: drop_all(self.status),
            category: drop_all(self.category),
            search: self.search.filter(|s| !s.is_empty()),
            sort: self.sort,
        }
    }
}

/// Request body for `POST /events/{id}/share`.
#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    pub email: String,
    /// Defaults to `viewer` if omitted.
    pub role: Option<String>,
}

/// Event detail payload: the row plus its ordered share list.
#[derive(Debug, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub shared_with: Vec<EventShare>,
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateEvent) -> AppResult<()> {
    event_rules::validate_name(&input.name)?;
    if let Some(d) = &input.description {
        event_rules::validate_description(d)?;
    }
    if let Some(s) = &input.status {
        event_rules::validate_status(s)?;
    }
    if let Some(c) = &input.category {
        event_rules::validate_category(c)?;
    }
    if let Some(b) = input.budget {
        event_rules::validate_budget(b)?;
    }
    if let Some(l) = &input.location {
        event_rules::validate_location(l)?;
    }
    Ok(())
}

fn validate_update(input: &UpdateEvent) -> AppResult<()> {
    if let Some(n) = &input.name {
        event_rules::validate_name(n)?;
    }
    if let Some(d) = &input.description {
        event_rules::validate_description(d)?;
    }
    if let Some(s) = &input.status {
        event_rules::validate_status(s)?;
    }
    if let Some(c) = &input.category {
        event_rules::validate_category(c)?;
    }
    if let Some(b) = input.budget {
        event_rules::validate_budget(b)?;
    }
    if let Some(l) = &input.location {
        event_rules::validate_location(l)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/events
///
/// Lists events *owned* by the acting user, with gift statistics. Events
/// shared with the user are reachable through the detail endpoint only.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<ListEventsQuery>,
) -> AppResult<Json<ListResponse<EventWithStats>>> {
    let filter = query.into_filter();
    let events = EventRepo::list_owned(&state.pool, auth_user.user_id, &filter).await?;
    Ok(Json(ListResponse::new(events)))
}

/// POST /api/v1/events
///
/// Any authenticated user may create an event; the acting user becomes owner.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<Event>>)> {
    validate_create(&input)?;
    let event = EventRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(event_id = event.id, owner_id = event.owner_id, "event created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// GET /api/v1/events/{id}
///
/// Visible to the owner and to any shared member.
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EventDetail>>> {
    let (event, shared_with) =
        fetch_event_authorized(&state.pool, id, auth_user.user_id, EventAction::View).await?;
    Ok(Json(DataResponse {
        data: EventDetail { event, shared_with },
    }))
}

/// PUT /api/v1/events/{id}
///
/// Owner only; no shared role satisfies this action.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<DataResponse<Event>>> {
    validate_update(&input)?;
    fetch_event_authorized(&state.pool, id, auth_user.user_id, EventAction::UpdateEvent).await?;

    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(Json(DataResponse { data: event }))
}

/// DELETE /api/v1/events/{id}
///
/// Owner only. Removes the event and every gift referencing it in one
/// transaction; a partial failure rolls back and surfaces as an error.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    fetch_event_authorized(&state.pool, id, auth_user.user_id, EventAction::DeleteEvent).await?;

    let (gifts_removed, event_removed) = EventRepo::delete_cascade(&state.pool, id).await?;
    if !event_removed {
        // Raced with another delete between the access check and the
        // transaction; the event is gone either way.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }));
    }
    tracing::info!(event_id = id, gifts_removed, "event deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/events/{id}/share
///
/// Owner only. Looks up the target user by email and appends a share entry;
/// a duplicate share is a conflict and never upgrades the existing role.
pub async fn share(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ShareRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<EventShare>>)> {
    let role = match &input.role {
        Some(r) => ShareRole::parse(r)?,
        None => ShareRole::Viewer,
    };

    let (event, _) =
        fetch_event_authorized(&state.pool, id, auth_user.user_id, EventAction::Share).await?;

    let target = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User with this email not found".into()))?;

    // The owner implicitly holds full rights; adding them to the share list
    // would break the "owner never appears in shared_with" invariant.
    if target.id == event.owner_id {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot share an event with its owner".into(),
        )));
    }

    if EventRepo::find_share(&state.pool, id, target.id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Event is already shared with this user".into(),
        )));
    }

    let share = EventRepo::add_share(&state.pool, id, target.id, role.as_str()).await?;
    tracing::info!(event_id = id, user_id = target.id, role = %role, "event shared");
    Ok((StatusCode::CREATED, Json(DataResponse { data: share })))
}
