//! Imperative shell for the axcrud record API.
//!
//! Store implementations, CRUD operations, request dispatch, configuration
//! and the HTTP adapter. Pure logic lives in `axcrud_core`.

pub mod app;
pub mod config;
pub mod handlers;
pub mod state;
pub mod storage;
