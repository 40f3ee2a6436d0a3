//! Handler for the write-only analytics collector.

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use heartboard_core::analytics as analytics_rules;
use heartboard_db::models::analytics::{AnalyticsEvent, CreateAnalyticsEvent, TrackEvent};
use heartboard_db::repositories::AnalyticsRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/analytics/track
///
/// Public endpoint: demo sessions track events before any account exists,
/// so no token is required. The user agent is taken from the request header
/// rather than the body.
pub async fn track(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<TrackEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<AnalyticsEvent>>)> {
    analytics_rules::validate_event_type(&input.event_type)?;
    analytics_rules::validate_user_type(&input.user_type)?;

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let event = AnalyticsRepo::create(
        &state.pool,
        &CreateAnalyticsEvent {
            event_type: input.event_type,
            user_id: input.user_id,
            user_email: input.user_email,
            user_type: input.user_type,
            page: input.page,
            user_agent,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}
