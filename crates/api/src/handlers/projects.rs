//! Handlers for `/projects` (CRUD + membership).
//!
//! Reads require authentication; writes require manager or admin. Managers
//! may only modify projects they lead.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use staffdesk_core::error::CoreError;
use staffdesk_core::roles::Role;
use staffdesk_core::types::DbId;
use staffdesk_db::models::project::{CreateProject, Project, ProjectMember, UpdateProject};
use staffdesk_db::repositories::{ProjectRepo, UserRepo};
use staffdesk_events::DomainEvent;

use crate::audit::{self, RequestMeta};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /projects/{id}/members`.
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: DbId,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a project or return 404.
async fn load_project(state: &AppState, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

/// Managers may only modify projects they lead; admins may modify any.
fn ensure_can_manage(user: &AuthUser, project: &Project) -> AppResult<()> {
    if user.role == Role::Admin || project.manager_id == user.user_id {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Only the project manager or an admin may modify this project".into(),
        )))
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects
///
/// List all projects. Any authenticated user.
pub async fn list_projects(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
///
/// Fetch a single project. Any authenticated user.
pub async fn get_project(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = load_project(&state, id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/projects
///
/// Create a project. Manager or admin. The manager is added as a member
/// automatically by the repository.
pub async fn create_project(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    meta: RequestMeta,
    Json(mut input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    // Managers always lead the projects they create; only admins may assign
    // another manager.
    if user.role != Role::Admin {
        input.manager_id = user.user_id;
    }

    let manager = UserRepo::find_by_id(&state.pool, input.manager_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.manager_id,
        }))?;
    if manager.role != Role::Manager.as_str() && manager.role != Role::Admin.as_str() {
        return Err(AppError::Core(CoreError::Validation(
            "Project manager must hold the manager or admin role".into(),
        )));
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;

    audit::record(
        &state.pool,
        &meta,
        user.user_id,
        "project.created",
        "project",
        Some(project.id),
        None,
        Some(serde_json::json!({ "name": &project.name, "manager_id": project.manager_id })),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: project }),
    ))
}

/// PUT /api/v1/projects/{id}
///
/// Update a project. Project manager or admin.
pub async fn update_project(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    meta: RequestMeta,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    let before = load_project(&state, id).await?;
    ensure_can_manage(&user, &before)?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    audit::record(
        &state.pool,
        &meta,
        user.user_id,
        "project.updated",
        "project",
        Some(id),
        Some(serde_json::json!({ "name": &before.name, "manager_id": before.manager_id })),
        Some(serde_json::json!({ "name": &project.name, "manager_id": project.manager_id })),
    )
    .await;

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
///
/// Delete a project and its memberships. Project manager or admin.
pub async fn delete_project(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    meta: RequestMeta,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let project = load_project(&state, id).await?;
    ensure_can_manage(&user, &project)?;

    ProjectRepo::delete(&state.pool, id).await?;

    audit::record(
        &state.pool,
        &meta,
        user.user_id,
        "project.deleted",
        "project",
        Some(id),
        Some(serde_json::json!({ "name": project.name })),
        None,
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Membership
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/members
///
/// List project members. Any authenticated user.
pub async fn list_members(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ProjectMember>>>> {
    load_project(&state, id).await?;
    let members = ProjectRepo::list_members(&state.pool, id).await?;
    Ok(Json(DataResponse { data: members }))
}

/// POST /api/v1/projects/{id}/members
///
/// Add a user to a project. Project manager or admin.
pub async fn add_member(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    meta: RequestMeta,
    Path(id): Path<DbId>,
    Json(input): Json<AddMemberRequest>,
) -> AppResult<StatusCode> {
    let project = load_project(&state, id).await?;
    ensure_can_manage(&user, &project)?;

    UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;

    ProjectRepo::add_member(&state.pool, id, input.user_id).await?;

    state.event_bus.publish(
        DomainEvent::new("member.added")
            .with_project(id)
            .with_source("user", input.user_id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({ "project_name": project.name })),
    );

    audit::record(
        &state.pool,
        &meta,
        user.user_id,
        "project.member_added",
        "project",
        Some(id),
        None,
        Some(serde_json::json!({ "user_id": input.user_id })),
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/projects/{id}/members/{user_id}
///
/// Remove a user from a project. Project manager or admin.
pub async fn remove_member(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    meta: RequestMeta,
    Path((id, member_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let project = load_project(&state, id).await?;
    ensure_can_manage(&user, &project)?;

    let removed = ProjectRepo::remove_member(&state.pool, id, member_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project member",
            id: member_id,
        }));
    }

    state.event_bus.publish(
        DomainEvent::new("member.removed")
            .with_project(id)
            .with_source("user", member_id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({ "project_name": project.name })),
    );

    audit::record(
        &state.pool,
        &meta,
        user.user_id,
        "project.member_removed",
        "project",
        Some(id),
        Some(serde_json::json!({ "user_id": member_id })),
        None,
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
