//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffdesk_core::types::{DbId, Timestamp};

/// A project led by a manager, with a member list in `project_members`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub manager_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project membership row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMember {
    pub project_id: DbId,
    pub user_id: DbId,
    pub added_at: Timestamp,
}

/// DTO for creating a project.
#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub manager_id: DbId,
}

/// DTO for updating a project. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub manager_id: Option<DbId>,
}
