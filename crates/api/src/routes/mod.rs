pub mod audit;
pub mod auth;
pub mod documents;
pub mod health;
pub mod holidays;
pub mod images;
pub mod notifications;
pub mod projects;
pub mod settings;
pub mod users;
pub mod weekly_reports;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /admin/users                         list, create (admin only)
/// /admin/users/{id}                    get, update, deactivate
/// /admin/users/{id}/reset-password     reset password (POST)
///
/// /admin/settings                      list, upsert (GET, PUT)
/// /admin/settings/{key}                get, delete
///
/// /admin/audit-logs                    filtered query with pagination (GET)
///
/// /projects                            list, create
/// /projects/{id}                       get, update, delete
/// /projects/{id}/members               list, add (GET, POST)
/// /projects/{id}/members/{user_id}     remove (DELETE)
/// /projects/{id}/documents             list, upload (GET, POST multipart)
/// /projects/{id}/activities            activity feed (GET)
///
/// /documents/{id}                      download, delete (GET, DELETE)
///
/// /images                              list, upload (GET, POST multipart)
/// /images/{id}                         serve bytes (GET)
///
/// /holidays                            list, create (GET, POST)
/// /holidays/{id}                       get, update, delete
///
/// /reports/weekly                      list, create (GET, POST)
/// /reports/weekly/{id}                 get (GET)
///
/// /notifications                       list (?unread_only, limit, offset)
/// /notifications/read-all              mark all read (POST)
/// /notifications/unread-count          unread count (GET)
/// /notifications/{id}/read             mark read (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin/users", users::router())
        .nest("/admin/settings", settings::router())
        .nest("/admin/audit-logs", audit::router())
        .nest("/projects", projects::router())
        .nest("/documents", documents::router())
        .nest("/images", images::router())
        .nest("/holidays", holidays::router())
        .nest("/reports/weekly", weekly_reports::router())
        .nest("/notifications", notifications::router())
}
