//! Networking modules for the auth server round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `api` owns the HTTP transport and
//! response interpretation, `provider` bridges the Google popup SDK, and
//! `submit` ties validation, transport and session storage together.

pub mod api;
pub mod provider;
pub mod submit;
pub mod types;
