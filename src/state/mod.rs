//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `toast`) so the form,
//! the submitter and the toaster each depend on a small focused model.

pub mod auth;
pub mod session;
pub mod toast;
