//! Staffdesk domain core.
//!
//! Pure domain types and helpers shared by every other crate in the
//! workspace: the closed [`Role`](roles::Role) model, the error taxonomy,
//! and the small token / email / date helpers used at the HTTP boundary.
//! This crate performs no I/O.

pub mod auth;
pub mod dates;
pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
