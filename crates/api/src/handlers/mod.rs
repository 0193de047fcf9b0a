pub mod auth;
pub mod category;
pub mod link;
