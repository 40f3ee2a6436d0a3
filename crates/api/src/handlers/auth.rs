//! Handlers for the `/auth` resource (register, login, profile).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use heartboard_core::error::CoreError;
use heartboard_core::roles::{ROLE_ADMIN, ROLE_USER};
use heartboard_db::models::user::{CreateUser, UpdateProfile, UserResponse};
use heartboard_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Minimum password length accepted at registration and password change.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `PUT /auth/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account and return a signed token. The configured admin email
/// receives the `admin` role; everyone else registers as `user`.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name is required".into(),
        )));
    }
    let email = input.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "A valid email is required".into(),
        )));
    }
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "A user with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let role = match &state.config.admin_email {
        Some(admin) if admin == &email => ROLE_ADMIN,
        _ => ROLE_USER,
    };

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name.trim().to_string(),
            email,
            password_hash,
            phone: input.phone.unwrap_or_default(),
            role: role.to_string(),
        },
    )
    .await?;

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. The error message never reveals
/// which of the two was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Email or password is incorrect".into()));

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "The user belonging to this token no longer exists".into(),
            ))
        })?;
    Ok(Json(DataResponse { data: user.into() }))
}

/// PUT /api/v1/auth/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    if let Some(email) = &input.email {
        if !email.contains('@') {
            return Err(AppError::Core(CoreError::Validation(
                "A valid email is required".into(),
            )));
        }
    }

    let user = UserRepo::update_profile(&state.pool, auth_user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(Json(DataResponse { data: user.into() }))
}

/// PUT /api/v1/auth/password
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;

    let current_valid = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, user.id, &password_hash).await?;

    Ok(StatusCode::NO_CONTENT)
}
