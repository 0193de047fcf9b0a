//! Row types and request DTOs.

pub mod admin;
pub mod category;
pub mod link;
