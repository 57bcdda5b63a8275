//! Networking modules for the task REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared by
//! the session layer and the task views.

pub mod api;
pub mod types;
