//! Request extractors whose rejections render as [`AppError`] envelopes
//! instead of axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
///
/// Malformed JSON or a missing `Content-Type: application/json` is a 400;
/// well-formed JSON missing a required field or carrying the wrong type
/// is a 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. A value that fails to parse (e.g. a non-integer id)
/// is a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string parameters. A query that fails to deserialize (e.g. a
/// repeated key) is a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
