//! Route-level pages.

pub mod auth_form;
pub mod home;
