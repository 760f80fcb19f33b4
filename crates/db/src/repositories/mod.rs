//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod audit_repo;
pub mod document_repo;
pub mod holiday_repo;
pub mod image_repo;
pub mod notification_repo;
pub mod project_repo;
pub mod session_repo;
pub mod setting_repo;
pub mod user_repo;
pub mod weekly_report_repo;

pub use activity_repo::ActivityRepo;
pub use audit_repo::AuditLogRepo;
pub use document_repo::DocumentRepo;
pub use holiday_repo::HolidayRepo;
pub use image_repo::ImageRepo;
pub use notification_repo::NotificationRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use setting_repo::SettingRepo;
pub use user_repo::UserRepo;
pub use weekly_report_repo::WeeklyReportRepo;
