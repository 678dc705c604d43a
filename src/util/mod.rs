//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate validation rules and routing side effects from
//! page and component logic to improve reuse and testability.

pub mod auth;
pub mod validate;
