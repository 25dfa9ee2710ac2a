//! # Auth Routes
//!
//! ```text
//! POST /auth/register    create an account, returns a token
//! POST /auth/login       exchange credentials for a token
//! GET  /auth/profile     the caller's account (bearer token required)
//! ```
//!
//! Passwords are stored as Argon2id PHC strings. Login failures are a
//! uniform 401 whether the email or the password was wrong.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::auth::{hash_password, verify_password, AuthUser};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use qa3at_core::types::{User, UserRole};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/profile", get(profile))
}

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest {
    #[validate(email(message = "email must be a valid address"))]
    email: String,

    #[validate(length(min = 1, message = "name is required"))]
    name: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct LoginRequest {
    #[validate(email(message = "email must be a valid address"))]
    email: String,

    #[validate(length(min = 1, message = "password is required"))]
    password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    token: String,
    user: User,
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /auth/register`
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    req.validate()?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        email: req.email.trim().to_lowercase(),
        name: req.name.trim().to_string(),
        password_hash: hash_password(&req.password)?,
        role: UserRole::Customer,
        created_at: Utc::now(),
    };

    state.db.users().create(&user).await?;

    let token = state.jwt.generate_token(&user.id, &user.email, user.role)?;

    info!(user_id = %user.id, "Account registered");
    Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
}

/// `POST /auth/login`
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    req.validate()?;

    let email = req.email.trim().to_lowercase();
    let user = state.db.users().find_by_email(&email).await?;

    // Uniform failure: don't reveal whether the email exists
    let user = match user {
        Some(u) if verify_password(&req.password, &u.password_hash) => u,
        _ => {
            return Err(ApiError::Unauthenticated(
                "Invalid email or password".to_string(),
            ))
        }
    };

    let token = state.jwt.generate_token(&user.id, &user.email, user.role)?;

    info!(user_id = %user.id, "Login succeeded");
    Ok(Json(AuthResponse { token, user }))
}

/// `GET /auth/profile`
async fn profile(auth: AuthUser, State(state): State<AppState>) -> ApiResult<Json<User>> {
    let user = state
        .db
        .users()
        .find_by_id(&auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Account no longer exists".to_string()))?;

    Ok(Json(user))
}
