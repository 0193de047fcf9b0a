//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- Session token signing and decoding.
//! - [`session`] -- Resolving a presented token back to a live admin.
//! - [`credentials`] -- Login and password change against the admin store.

pub mod credentials;
pub mod jwt;
pub mod password;
pub mod session;
