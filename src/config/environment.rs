// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into typed storage, cooldown, and generator settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

//! Environment-based configuration

use anyhow::{bail, Context, Result};
use chrono::TimeDelta;
use nutrivida_core::constants::cooldowns::{
    DIET_PLAN_COOLDOWN_DAYS, MAX_COOLDOWN_DAYS, MAX_COOLDOWN_HOURS,
    MOTIVATIONAL_TIPS_COOLDOWN_DAYS, RECIPE_COOLDOWN_HOURS,
};
use nutrivida_intelligence::availability::CooldownPolicy;
use nutrivida_intelligence::generator::LocalContentGenerator;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, Level};

/// Default on-disk database location
const DEFAULT_DATABASE_PATH: &str = "./data/nutrivida.db";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to a `tracing` level
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe generation store location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Database file
        path: PathBuf,
    },
    /// In-memory `SQLite` database
    SQLiteMemory,
    /// Process-local map without `SQLite`
    Memory,
}

impl DatabaseUrl {
    /// Parse from string
    ///
    /// # Errors
    ///
    /// Returns an error for an empty `SQLite` path
    pub fn parse_url(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "memory" {
            return Ok(Self::Memory);
        }
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        match path_str {
            ":memory:" => Ok(Self::SQLiteMemory),
            "" => bail!("database url '{s}' has an empty path"),
            path => Ok(Self::SQLite {
                path: PathBuf::from(path.trim_start_matches("//")),
            }),
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::SQLiteMemory => "sqlite::memory:".to_owned(),
            Self::Memory => "memory".to_owned(),
        }
    }

    /// Check if this is backed by `SQLite`
    #[must_use]
    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SQLite { .. } | Self::SQLiteMemory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Regeneration cooldowns
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CooldownConfig {
    /// Diet plan cooldown in days
    pub diet_plan_days: i64,
    /// Recipe cooldown in hours
    pub recipe_hours: i64,
    /// Motivational tips cooldown in days
    pub motivational_tips_days: i64,
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            diet_plan_days: DIET_PLAN_COOLDOWN_DAYS,
            recipe_hours: RECIPE_COOLDOWN_HOURS,
            motivational_tips_days: MOTIVATIONAL_TIPS_COOLDOWN_DAYS,
        }
    }
}

impl CooldownConfig {
    /// Policy consumed by the availability gate
    ///
    /// # Errors
    ///
    /// Returns an error if a cooldown does not fit in a `TimeDelta`
    pub fn to_policy(&self) -> Result<CooldownPolicy> {
        let diet_plan = TimeDelta::try_days(self.diet_plan_days)
            .context("DIET_PLAN_COOLDOWN_DAYS is out of range")?;
        let recipe = TimeDelta::try_hours(self.recipe_hours)
            .context("RECIPE_COOLDOWN_HOURS is out of range")?;
        let motivational_tips = TimeDelta::try_days(self.motivational_tips_days)
            .context("MOTIVATIONAL_TIPS_COOLDOWN_DAYS is out of range")?;
        Ok(CooldownPolicy::new(diet_plan, recipe, motivational_tips))
    }
}

/// Content generation strategy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Built-in catalog
    #[default]
    Local,
}

impl GeneratorKind {
    /// Parse the configured strategy name
    ///
    /// # Errors
    ///
    /// Returns an error for unknown strategies
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            LocalContentGenerator::NAME => Ok(Self::Local),
            other => bail!("unknown content generator '{other}' (supported: local)"),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str(LocalContentGenerator::NAME),
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Generation store location
    pub database: DatabaseUrl,
    /// Regeneration cooldowns
    pub cooldowns: CooldownConfig,
    /// Generation strategy
    pub generator: GeneratorKind,
    /// Return generation errors instead of serving fallback notices
    pub strict_generation: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            log_level: LogLevel::Info,
            database: DatabaseUrl::default(),
            cooldowns: CooldownConfig::default(),
            generator: GeneratorKind::Local,
            strict_generation: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but malformed, or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let environment = Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development"));
        let defaults = CooldownConfig::default();

        let config = Self {
            environment,
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            database: DatabaseUrl::parse_url(&env_var_or("DATABASE_URL", DEFAULT_DATABASE_PATH))
                .context("Invalid DATABASE_URL value")?,
            cooldowns: CooldownConfig {
                diet_plan_days: env_var_or("DIET_PLAN_COOLDOWN_DAYS", &defaults.diet_plan_days.to_string())
                    .parse()
                    .context("Invalid DIET_PLAN_COOLDOWN_DAYS value")?,
                recipe_hours: env_var_or("RECIPE_COOLDOWN_HOURS", &defaults.recipe_hours.to_string())
                    .parse()
                    .context("Invalid RECIPE_COOLDOWN_HOURS value")?,
                motivational_tips_days: env_var_or(
                    "MOTIVATIONAL_TIPS_COOLDOWN_DAYS",
                    &defaults.motivational_tips_days.to_string(),
                )
                .parse()
                .context("Invalid MOTIVATIONAL_TIPS_COOLDOWN_DAYS value")?,
            },
            generator: GeneratorKind::parse(&env_var_or("CONTENT_GENERATOR", "local"))
                .context("Invalid CONTENT_GENERATOR value")?,
            strict_generation: env_var_or(
                "STRICT_GENERATION",
                &(!environment.is_production()).to_string(),
            )
            .parse()
            .context("Invalid STRICT_GENERATION value")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any cooldown is not positive or exceeds ten years
    pub fn validate(&self) -> Result<()> {
        let cooldowns = [
            (
                "DIET_PLAN_COOLDOWN_DAYS",
                self.cooldowns.diet_plan_days,
                MAX_COOLDOWN_DAYS,
            ),
            (
                "RECIPE_COOLDOWN_HOURS",
                self.cooldowns.recipe_hours,
                MAX_COOLDOWN_HOURS,
            ),
            (
                "MOTIVATIONAL_TIPS_COOLDOWN_DAYS",
                self.cooldowns.motivational_tips_days,
                MAX_COOLDOWN_DAYS,
            ),
        ];
        for (name, value, max) in cooldowns {
            if !(1..=max).contains(&value) {
                bail!("{name} must be between 1 and {max}, got {value}");
            }
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "NutriVida Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Store: {}\n\
             - Generator: {}\n\
             - Strict Generation: {}\n\
             - Cooldowns: diet plan {}d, recipe {}h, motivational tips {}d",
            self.environment,
            self.log_level,
            self.database,
            self.generator,
            self.strict_generation,
            self.cooldowns.diet_plan_days,
            self.cooldowns.recipe_hours,
            self.cooldowns.motivational_tips_days,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
