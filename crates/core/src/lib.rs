//! Domain primitives shared by the database and HTTP layers.

pub mod credentials;
pub mod error;
pub mod ordering;
pub mod types;
