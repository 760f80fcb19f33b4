//! Staffdesk HTTP API.
//!
//! Axum handlers, routes, middleware, and supporting infrastructure for the
//! HR / project-management backend. The binary entrypoint lives in
//! `main.rs`; everything here is exported so integration tests can build
//! the same router the server runs.

pub mod audit;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
