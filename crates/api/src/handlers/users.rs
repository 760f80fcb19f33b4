//! Handlers for `/admin/users` (user management, admin only).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use staffdesk_core::error::CoreError;
use staffdesk_core::roles::Role;
use staffdesk_core::types::DbId;
use staffdesk_core::validation::is_valid_email;
use staffdesk_db::models::user::{CreateUser, UpdateUser, UserResponse};
use staffdesk_db::repositories::{SessionRepo, UserRepo};
use staffdesk_events::EmailMessage;

use crate::audit::{self, RequestMeta};
use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Request body for `PUT /admin/users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

/// Request body for `POST /admin/users/{id}/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/users
///
/// List all users. Admin only.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;
    let data = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/users/{id}
///
/// Fetch a single user. Admin only.
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }))?;
    Ok(Json(DataResponse { data: user.into() }))
}

/// POST /api/v1/admin/users
///
/// Create a new user. Admin only. Sends a welcome email when SMTP is
/// configured.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    meta: RequestMeta,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    if !is_valid_email(&input.email) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid email address: {}",
            input.email
        ))));
    }

    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        name: input.name,
        email: input.email,
        password_hash,
        role: input.role.as_str().to_string(),
    };
    let user = UserRepo::create(&state.pool, &create).await?;

    audit::record(
        &state.pool,
        &meta,
        admin.user_id,
        "user.created",
        "user",
        Some(user.id),
        None,
        Some(serde_json::json!({ "email": &user.email, "role": &user.role })),
    )
    .await;

    // Welcome email is fire-and-forget; account creation never fails on SMTP.
    if let Some(email_service) = state.email.clone() {
        let message = EmailMessage {
            to: user.email.clone(),
            subject: "Welcome to Staffdesk".to_string(),
            html: format!(
                "<p>Hi {},</p><p>An account has been created for you. \
                 You can now sign in with your email address.</p>",
                user.name
            ),
        };
        tokio::spawn(async move {
            if let Err(e) = email_service.send(&message).await {
                tracing::error!(error = %e, "Failed to send welcome email");
            }
        });
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: user.into() })))
}

/// PUT /api/v1/admin/users/{id}
///
/// Update a user's profile fields. Admin only.
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    meta: RequestMeta,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    if let Some(ref email) = input.email {
        if !is_valid_email(email) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid email address: {email}"
            ))));
        }
    }

    let before = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }))?;

    let update = UpdateUser {
        name: input.name,
        email: input.email,
        role: input.role.map(|r| r.as_str().to_string()),
        is_active: input.is_active,
    };
    let user = UserRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }))?;

    audit::record(
        &state.pool,
        &meta,
        admin.user_id,
        "user.updated",
        "user",
        Some(id),
        Some(serde_json::json!({
            "name": before.name, "email": before.email,
            "role": before.role, "is_active": before.is_active,
        })),
        Some(serde_json::json!({
            "name": &user.name, "email": &user.email,
            "role": &user.role, "is_active": user.is_active,
        })),
    )
    .await;

    Ok(Json(DataResponse { data: user.into() }))
}

/// DELETE /api/v1/admin/users/{id}
///
/// Deactivate a user (soft delete) and revoke their sessions. Admin only.
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    meta: RequestMeta,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = UserRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }));
    }

    SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    audit::record(
        &state.pool,
        &meta,
        admin.user_id,
        "user.deactivated",
        "user",
        Some(id),
        None,
        None,
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/users/{id}/reset-password
///
/// Set a new password for a user and revoke their sessions. Admin only.
pub async fn reset_password(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    meta: RequestMeta,
    Path(id): Path<DbId>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = UserRepo::update_password(&state.pool, id, &password_hash).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }));
    }

    // Force re-authentication everywhere after a password reset.
    SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    audit::record(
        &state.pool,
        &meta,
        admin.user_id,
        "user.password_reset",
        "user",
        Some(id),
        None,
        None,
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
