// ABOUTME: Instant parsing for the --at flag of nutrivida-cli
// ABOUTME: Accepts RFC 3339 timestamps or bare dates at midnight UTC
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, Utc};
use nutrivida::services::ContentService;

/// Instant named by `--at`, or the service clock when absent
pub fn resolve_instant(service: &ContentService, at: Option<&str>) -> Result<DateTime<Utc>> {
    at.map_or_else(|| Ok(service.now()), parse_instant)
}

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
        bail!("invalid instant '{value}': expected RFC 3339 or YYYY-MM-DD");
    };
    match date.and_hms_opt(0, 0, 0) {
        Some(midnight) => Ok(midnight.and_utc()),
        None => bail!("invalid instant '{value}'"),
    }
}
