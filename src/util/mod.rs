//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep navigation rules out of page components so they can
//! be unit tested without a browser.

pub mod route_guard;
