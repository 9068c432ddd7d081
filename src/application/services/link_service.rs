//! Link shortening, redirect resolution and stats service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::LinkStats;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::is_valid_code;
use crate::utils::url_validator::{sanitize_url, validate_url};

/// Result of a successful shorten request.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortenedLink {
    pub code: String,
    pub short_url: String,
    pub target: String,
}

/// Service for creating short links and serving lookups.
///
/// Input is trimmed, validated, then sanitized before it reaches the store.
pub struct LinkService<S: LinkStore> {
    store: Arc<S>,
    base_url: String,
}

impl<S: LinkStore> LinkService<S> {
    /// Creates a new link service.
    ///
    /// `base_url` is the scheme and authority short URLs are built from,
    /// without a trailing slash.
    pub fn new(store: Arc<S>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }

    /// Validates `raw` and stores it under a new short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is rejected.
    /// Returns [`AppError::Internal`] if the store cannot allocate a code.
    pub async fn shorten(&self, raw: &str) -> Result<ShortenedLink, AppError> {
        let trimmed = raw.trim();

        validate_url(trimmed).map_err(|e| {
            debug!(url = %trimmed, reason = %e, "Rejected target URL");
            AppError::bad_request(e.to_string(), json!({ "url": raw }))
        })?;

        let target = sanitize_url(trimmed);
        let code = self.store.add(target.clone())?;

        info!(code = %code, target = %target, "Short link created");

        Ok(ShortenedLink {
            short_url: self.short_url(&code),
            code,
            target,
        })
    }

    /// Returns the target for `code`, counting one click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let target = is_valid_code(code)
            .then(|| self.store.resolve(code))
            .flatten()
            .ok_or_else(|| AppError::not_found("Resource not found", json!({ "code": code })))?;

        debug!(code = %code, "Redirect resolved");
        Ok(target)
    }

    /// Returns a click-count snapshot for `code` without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn stats(&self, code: &str) -> Result<LinkStats, AppError> {
        is_valid_code(code)
            .then(|| self.store.stats(code))
            .flatten()
            .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))
    }

    /// Number of links currently stored.
    pub fn link_count(&self) -> usize {
        self.store.count()
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
