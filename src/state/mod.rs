//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `tasks`) so views depend on small
//! focused models provided through Leptos context.

pub mod session;
pub mod tasks;
