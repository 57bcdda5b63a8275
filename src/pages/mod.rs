//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is applied around pages by the route guard.

pub mod dashboard;
pub mod login;
pub mod register;
