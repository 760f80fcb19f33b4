//! Route definitions for the `/projects` resource, including nested
//! documents and activities.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{activities, documents, projects};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                       -> list_projects
/// POST   /                       -> create_project (manager/admin)
/// GET    /{id}                   -> get_project
/// PUT    /{id}                   -> update_project (manager/admin)
/// DELETE /{id}                   -> delete_project (manager/admin)
///
/// GET    /{id}/members           -> list_members
/// POST   /{id}/members           -> add_member (manager/admin)
/// DELETE /{id}/members/{user_id} -> remove_member (manager/admin)
///
/// GET    /{id}/documents         -> list_documents
/// POST   /{id}/documents         -> upload_document (multipart)
///
/// GET    /{id}/activities        -> list_activities
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route(
            "/{id}/members",
            get(projects::list_members).post(projects::add_member),
        )
        .route(
            "/{id}/members/{user_id}",
            delete(projects::remove_member),
        )
        .route(
            "/{id}/documents",
            get(documents::list_documents).post(documents::upload_document),
        )
        .route("/{id}/activities", get(activities::list_activities))
}
