//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod category_repo;
pub mod link_repo;

pub use admin_repo::AdminRepo;
pub use category_repo::CategoryRepo;
pub use link_repo::LinkRepo;
