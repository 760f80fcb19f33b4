//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod activity;
pub mod audit;
pub mod document;
pub mod holiday;
pub mod image;
pub mod notification;
pub mod project;
pub mod session;
pub mod setting;
pub mod user;
pub mod weekly_report;
