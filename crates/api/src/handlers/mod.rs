//! HTTP request handlers, one module per resource.

pub mod activities;
pub mod audit;
pub mod auth;
pub mod documents;
pub mod holidays;
pub mod images;
pub mod notifications;
pub mod projects;
pub mod settings;
pub mod users;
pub mod weekly_reports;
