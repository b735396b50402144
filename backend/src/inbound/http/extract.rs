//! Extractor configuration.
//!
//! Malformed bodies, query strings and paths all surface as internal errors
//! with the standard error body instead of Actix's plain-text 400 responses.

use std::fmt::Display;

use actix_web::web;
use tracing::debug;

use crate::domain::Error;

fn reject(kind: &'static str, err: impl Display) -> actix_web::Error {
    debug!(error = %err, extractor = kind, "request extraction failed");
    Error::internal(format!("invalid {kind}: {err}")).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| reject("json body", err))
}

pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| reject("form body", err))
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| reject("query string", err))
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| reject("path", err))
}
