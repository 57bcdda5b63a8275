//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard pieces and shared chrome while reading state
//! from Leptos context providers or props.

pub mod loading_screen;
pub mod summary_cards;
pub mod task_item;
