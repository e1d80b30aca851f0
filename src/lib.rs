// ABOUTME: Main library entry point for the NutriVida content service
// ABOUTME: Wires configuration, logging, generation stores, and the cooldown-gated content service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

#![deny(unsafe_code)]

//! # `NutriVida`
//!
//! Deterministic, cooldown-gated content for a weight-management app: daily
//! diet plans, healthy recipes, and motivational tips.
//!
//! Selection and rendering live in `nutrivida-intelligence`; shared models and
//! errors live in `nutrivida-core`. This crate adds persistence, configuration,
//! logging, and the [`services::ContentService`] that ties them together.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrivida::config::environment::ServerConfig;
//! use nutrivida::services::ContentService;
//! use nutrivida_core::models::ContentKind;
//! use nutrivida_intelligence::RenderParameters;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let service = ContentService::from_config(&config).await?;
//!     let plan = service
//!         .get_or_generate("user-1", ContentKind::DietPlan, service.now(), &RenderParameters::default())
//!         .await?;
//!     println!("{}", plan.text);
//!     Ok(())
//! }
//! ```

/// Injectable wall clock
pub mod clock;

/// Environment-only configuration
pub mod config;

/// Structured logging setup and generation event helpers
pub mod logging;

/// Cooldown-gated content service
pub mod services;

/// Generation record persistence
pub mod store;

pub use nutrivida_core as core;
pub use nutrivida_intelligence as intelligence;
