//! Extractors whose rejections render as [`AppError`] JSON bodies.
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies and, for
//! JSON that parses but does not match the DTO, a 422. These wrappers turn
//! every such rejection into a 400 with the usual `{ error, code }` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Malformed or mismatched JSON is a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// URL path parameters. Non-numeric or out-of-range ids are a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
