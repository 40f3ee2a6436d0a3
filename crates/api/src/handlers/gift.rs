//! Handlers for the `/gifts` resource.
//!
//! Every gift operation is gated by the parent event's grants, so each
//! handler resolves the gift (a miss is `NotFound`), then runs the event
//! access check for the specific action.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use heartboard_core::access::EventAction;
use heartboard_core::error::CoreError;
use heartboard_core::gift as gift_rules;
use heartboard_core::types::DbId;
use heartboard_db::models::gift::{CreateGift, Gift, UpdateGift};
use heartboard_db::repositories::GiftRepo;

use crate::access::fetch_event_authorized;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateGift) -> AppResult<()> {
    gift_rules::validate_name(&input.name)?;
    gift_rules::validate_price(input.price)?;
    if let Some(d) = &input.description {
        gift_rules::validate_description(d)?;
    }
    if let Some(c) = &input.currency {
        gift_rules::validate_currency(c)?;
    }
    if let Some(l) = &input.link {
        gift_rules::validate_link(l)?;
    }
    if let Some(s) = &input.status {
        gift_rules::validate_status(s)?;
    }
    if let Some(p) = &input.priority {
        gift_rules::validate_priority(p)?;
    }
    if let Some(n) = &input.notes {
        gift_rules::validate_notes(n)?;
    }
    Ok(())
}

fn validate_update(input: &UpdateGift) -> AppResult<()> {
    if let Some(n) = &input.name {
        gift_rules::validate_name(n)?;
    }
    if let Some(p) = input.price {
        gift_rules::validate_price(p)?;
    }
    if let Some(d) = &input.description {
        gift_rules::validate_description(d)?;
    }
    if let Some(c) = &input.currency {
        gift_rules::validate_currency(c)?;
    }
    if let Some(l) = &input.link {
        gift_rules::validate_link(l)?;
    }
    if let Some(s) = &input.status {
        gift_rules::validate_status(s)?;
    }
    if let Some(p) = &input.priority {
        gift_rules::validate_priority(p)?;
    }
    if let Some(n) = &input.notes {
        gift_rules::validate_notes(n)?;
    }
    Ok(())
}

/// Resolve a gift by id, failing with `NotFound` when absent.
async fn find_gift(state: &AppState, id: DbId) -> AppResult<Gift> {
    GiftRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Gift", id }))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/gifts/event/{event_id}
///
/// Lists an event's gifts, newest first. Requires view access on the event.
pub async fn list_by_event(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<ListResponse<Gift>>> {
    fetch_event_authorized(&state.pool, event_id, auth_user.user_id, EventAction::View).await?;
    let gifts = GiftRepo::list_by_event(&state.pool, event_id).await?;
    Ok(Json(ListResponse::new(gifts)))
}

/// POST /api/v1/gifts
///
/// Requires editor rights (or ownership) on the parent event named in the
/// body. The acting user is recorded as `created_by`.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateGift>,
) -> AppResult<(StatusCode, Json<DataResponse<Gift>>)> {
    validate_create(&input)?;
    fetch_event_authorized(
        &state.pool,
        input.event_id,
        auth_user.user_id,
        EventAction::CreateGift,
    )
    .await?;

    let gift = GiftRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(gift_id = gift.id, event_id = gift.event_id, "gift created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: gift })))
}

/// PUT /api/v1/gifts/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGift>,
) -> AppResult<Json<DataResponse<Gift>>> {
    validate_update(&input)?;
    let gift = find_gift(&state, id).await?;
    fetch_event_authorized(
        &state.pool,
        gift.event_id,
        auth_user.user_id,
        EventAction::UpdateGift,
    )
    .await?;

    let gift = GiftRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Gift", id }))?;
    Ok(Json(DataResponse { data: gift }))
}

/// PATCH /api/v1/gifts/{id}/toggle
///
/// Flips the completion flag. Completing stamps the acting user and the
/// current time as purchaser; un-completing clears both, so a double toggle
/// is not a no-op on those fields.
pub async fn toggle(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Gift>>> {
    let gift = find_gift(&state, id).await?;
    fetch_event_authorized(
        &state.pool,
        gift.event_id,
        auth_user.user_id,
        EventAction::ToggleGift,
    )
    .await?;

    let gift = GiftRepo::toggle_done(&state.pool, id, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Gift", id }))?;
    Ok(Json(DataResponse { data: gift }))
}

/// DELETE /api/v1/gifts/{id}
///
/// Owner or an admin-role share only.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let gift = find_gift(&state, id).await?;
    fetch_event_authorized(
        &state.pool,
        gift.event_id,
        auth_user.user_id,
        EventAction::DeleteGift,
    )
    .await?;

    let deleted = GiftRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Gift", id }))
    }
}
