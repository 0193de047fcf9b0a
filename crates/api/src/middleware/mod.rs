//! Authentication middleware and extractors.
//!
//! - [`auth::require_session`] -- Gate applied to every protected route.
//! - [`auth::AuthAdmin`] -- The admin resolved by the gate, as a handler argument.

pub mod auth;
