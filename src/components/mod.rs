//! Reusable UI components for the auth pages.

pub mod input_box;
pub mod toaster;
