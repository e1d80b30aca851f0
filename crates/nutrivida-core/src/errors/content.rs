// ABOUTME: Catalog and rendering error types for the content engine
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

//! # Content Error Types
//!
//! - `CatalogError` - the catalog does not match the slots the engine needs.
//!   These are configuration defects and should surface at startup.
//! - `FormatError` - assembled content is missing a field a template requires.

use super::{AppError, ErrorCode};
use crate::models::{ContentKind, ContentSlot};
use thiserror::Error;

/// Catalog configuration defects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Slot has no table in the catalog
    #[error("catalog has no table for slot '{slot}'")]
    MissingSlot {
        /// Slot that was requested
        slot: ContentSlot,
    },
    /// Slot table exists but holds no variants
    #[error("catalog table for slot '{slot}' is empty")]
    EmptySlot {
        /// Slot with the empty table
        slot: ContentSlot,
    },
    /// Index outside the slot table
    #[error("index {index} is out of range for slot '{slot}' ({len} variants)")]
    IndexOutOfRange {
        /// Slot that was indexed
        slot: ContentSlot,
        /// Requested index
        index: usize,
        /// Number of variants in the slot
        len: usize,
    },
}

impl CatalogError {
    /// Slot the error refers to
    #[must_use]
    pub const fn slot(&self) -> ContentSlot {
        match self {
            Self::MissingSlot { slot }
            | Self::EmptySlot { slot }
            | Self::IndexOutOfRange { slot, .. } => *slot,
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let slot = error.slot();
        Self::new(ErrorCode::ConfigInvalid, error.to_string())
            .with_resource_id(slot.discriminator())
            .with_source(error)
    }
}

/// Template rendering failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A field required by the template is absent
    #[error("{kind} template requires field '{field}'")]
    MissingField {
        /// Content kind being rendered
        kind: ContentKind,
        /// Name of the missing field
        field: String,
    },
    /// Assembled content does not belong to the requested kind
    #[error("cannot render {found} content with the {expected} template")]
    KindMismatch {
        /// Kind whose template was requested
        expected: ContentKind,
        /// Kind of the assembled content
        found: ContentKind,
    },
}

impl FormatError {
    /// Create a "missing field" error
    #[must_use]
    pub fn missing_field(kind: ContentKind, field: impl Into<String>) -> Self {
        Self::MissingField {
            kind,
            field: field.into(),
        }
    }
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        let code = match error {
            FormatError::MissingField { .. } => ErrorCode::MissingRequiredField,
            FormatError::KindMismatch { .. } => ErrorCode::InvalidFormat,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
