// ABOUTME: Content generation strategy trait and the catalog-backed local implementation
// ABOUTME: Composes the plan selector and formatter behind a pluggable seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

use crate::catalog::ContentCatalog;
use crate::formatter::{render, RenderParameters};
use crate::selector::PlanSelector;
use chrono::{DateTime, Utc};
use nutrivida_core::errors::{AppError, CatalogError, ErrorCode, FormatError};
use nutrivida_core::models::{ContentKind, ContextToken};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Everything a strategy needs to produce one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest<'a> {
    /// Opaque user identifier
    pub user_id: &'a str,
    /// Kind to generate
    pub kind: ContentKind,
    /// Bucket appended to every selection seed
    pub token: ContextToken,
    /// Template parameters
    pub params: RenderParameters,
}

impl<'a> GenerationRequest<'a> {
    /// Request using the natural bucket for `now`
    ///
    /// Motivational tips follow the weeks-on-diet count when it is known; every
    /// other kind is bucketed by calendar day.
    #[must_use]
    pub fn natural(
        user_id: &'a str,
        kind: ContentKind,
        now: DateTime<Utc>,
        params: RenderParameters,
    ) -> Self {
        let token = match (kind, params.weeks_on_diet) {
            (ContentKind::MotivationalTips, Some(weeks)) => ContextToken::Week(weeks),
            _ => ContextToken::Day(now.date_naive()),
        };
        Self {
            user_id,
            kind,
            token,
            params,
        }
    }

    /// Request with a token derived from `now` that escapes the natural bucket
    #[must_use]
    pub fn forced(
        user_id: &'a str,
        kind: ContentKind,
        now: DateTime<Utc>,
        params: RenderParameters,
    ) -> Self {
        Self {
            user_id,
            kind,
            token: ContextToken::forced_at(now.timestamp_millis()),
            params,
        }
    }
}

/// Generation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Catalog does not have what the kind needs
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Template could not be filled
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Strategy cannot serve requests right now
    #[error("{generator} generator is unavailable: {reason}")]
    Unavailable {
        /// Strategy name
        generator: String,
        /// Failure description
        reason: String,
    },
}

impl From<GenerationError> for AppError {
    fn from(error: GenerationError) -> Self {
        match error {
            GenerationError::Catalog(e) => e.into(),
            GenerationError::Format(e) => e.into(),
            GenerationError::Unavailable { .. } => {
                Self::new(ErrorCode::ResourceUnavailable, error.to_string())
            }
        }
    }
}

/// Strategy producing rendered text for a request
pub trait ContentGenerator: Send + Sync {
    /// Strategy name used in logs and configuration
    fn name(&self) -> &'static str;

    /// Produce the rendered text
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be selected or rendered
    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError>;
}

/// Catalog-backed generator
#[derive(Debug, Clone)]
pub struct LocalContentGenerator {
    catalog: Arc<ContentCatalog>,
}

impl LocalContentGenerator {
    /// Configuration value selecting this strategy
    pub const NAME: &'static str = "local";

    /// Generator over a specific catalog
    #[must_use]
    pub const fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self { catalog }
    }

    /// Generator over the process-wide built-in catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in catalog fails validation
    pub fn builtin() -> Result<Self, CatalogError> {
        ContentCatalog::global().map(Self::new)
    }

    /// Catalog in use
    #[must_use]
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }
}

impl ContentGenerator for LocalContentGenerator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError> {
        let selector = PlanSelector::new(&self.catalog);
        let content = selector.select(request.kind, request.user_id, &request.token)?;
        debug!(
            user.id = %request.user_id,
            content.kind = %request.kind,
            context.token = %request.token,
            "Selected catalog content"
        );
        Ok(render(request.kind, &content, &request.params)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_natural_token_for_tips_uses_weeks() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let params = RenderParameters::default().weeks_on_diet(3);
        let request = GenerationRequest::natural("u", ContentKind::MotivationalTips, now, params);
        assert_eq!(request.token, ContextToken::Week(3));

        let request = GenerationRequest::natural("u", ContentKind::Recipe, now, params);
        assert_eq!(request.token.to_string(), "2024-01-01");
    }

    #[test]
    fn test_forced_token_uses_millis() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let request =
            GenerationRequest::forced("u", ContentKind::Recipe, now, RenderParameters::default());
        assert_eq!(request.token.to_string(), "force-1704067200000");
    }
}
