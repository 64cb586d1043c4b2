//! Handlers for login and self-registration.
//!
//! No session or token is issued: a successful login returns the public user
//! fields and the client keeps them.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pgmanager_core::error::CoreError;
use pgmanager_core::roles::validate_role;
use pgmanager_core::types::DbId;
use pgmanager_db::models::user::{CreateUser, User};
use pgmanager_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: String,
}

/// Request body for `POST /api/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub phone: Option<String>,
}

/// Response body for login and register.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<User> for AuthResponse {
    fn from(user: User) -> Self {
        Self {
            user: UserInfo {
                id: user.id,
                email: user.email,
                name: user.name,
                role: user.role,
            },
        }
    }
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Unknown email, wrong password, and a role that does not match the stored
/// one all fail identically with 401.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    input.validate()?;
    validate_role(&input.role)?;

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid || user.role != input.role {
        tracing::info!(email = %input.email, role = %input.role, "Login rejected");
        return Err(invalid_credentials());
    }

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");
    Ok(Json(user.into()))
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input.validate()?;
    validate_role(&input.role)?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "User already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            password_hash,
            role: input.role,
            name: input.name,
            phone: input.phone,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, role = %user.role, "User registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}
