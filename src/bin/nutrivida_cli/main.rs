// ABOUTME: NutriVida CLI - command-line access to the cooldown-gated content service
// ABOUTME: Generates plans, recipes, and tips, forces regeneration, and inspects history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors
//!
//! Usage:
//! ```bash
//! # Today's diet plan for a user (served from storage until the cooldown ends)
//! nutrivida-cli plan --user abc123 --calories 1800
//!
//! # Recipe as of a given day
//! nutrivida-cli recipe --user abc123 --at 2024-01-01
//!
//! # Motivational tips for the third week on the diet
//! nutrivida-cli tips --user abc123 --weeks 3
//!
//! # Force a new recipe (rejected while the cooldown is active)
//! nutrivida-cli regenerate --user abc123 --kind recipe
//!
//! # Administrator override
//! nutrivida-cli regenerate --user abc123 --kind diet-plan --admin-reason "support ticket"
//!
//! # Cooldown status and history
//! nutrivida-cli status --user abc123
//! nutrivida-cli history --user abc123 --kind recipe --limit 5
//!
//! # Metabolic profile
//! nutrivida-cli metrics --age 30 --gender female --height 165 --weight 80 --goal 65 --activity light
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use nutrivida::config::environment::{DatabaseUrl, ServerConfig};
use nutrivida::logging::LoggingConfig;
use nutrivida::services::ContentService;
use nutrivida_core::models::{ContentKind, Gender};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "nutrivida-cli",
    about = "NutriVida content CLI",
    long_about = "Deterministic diet plans, recipes, and motivational tips with regeneration cooldowns."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (memory, sqlite::memory:, sqlite:<path>)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Daily diet plan
    Plan(ContentArgs),

    /// Healthy recipe
    Recipe(ContentArgs),

    /// Motivational tips
    Tips(ContentArgs),

    /// Force new content, subject to the cooldown unless an admin reason is given
    Regenerate {
        /// Content kind
        #[arg(long, value_enum)]
        kind: KindArg,

        #[command(flatten)]
        content: ContentArgs,

        /// Bypass the cooldown as an administrator, recording the reason
        #[arg(long)]
        admin_reason: Option<String>,
    },

    /// Cooldown status for every content kind
    Status {
        /// User identifier
        #[arg(long)]
        user: String,

        /// Evaluate at this instant (RFC 3339 or YYYY-MM-DD) instead of now
        #[arg(long)]
        at: Option<String>,
    },

    /// Previously generated texts, newest first
    History {
        /// User identifier
        #[arg(long)]
        user: String,

        /// Only this kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        /// Maximum number of entries
        #[arg(long)]
        limit: Option<u32>,

        /// Print the full text of each entry
        #[arg(long, short = 'd')]
        detailed: bool,
    },

    /// Metabolic profile and calorie target
    Metrics(ProfileArgs),
}

#[derive(Args)]
struct ContentArgs {
    /// User identifier
    #[arg(long)]
    user: String,

    /// Daily calorie target for diet plans
    #[arg(long)]
    calories: Option<u32>,

    /// Weeks on the diet (buckets motivational tips)
    #[arg(long)]
    weeks: Option<u32>,

    /// Generate as of this instant (RFC 3339 or YYYY-MM-DD) instead of now
    #[arg(long)]
    at: Option<String>,
}

#[derive(Args)]
struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    age: u32,

    /// Gender
    #[arg(long, value_enum)]
    gender: GenderArg,

    /// Height in centimeters
    #[arg(long)]
    height: f64,

    /// Current weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Goal weight in kilograms
    #[arg(long)]
    goal: f64,

    /// Activity level (sedentary, light, moderate, active, very-active)
    #[arg(long, default_value = "sedentary")]
    activity: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    DietPlan,
    Recipe,
    Tips,
}

impl From<KindArg> for ContentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::DietPlan => Self::DietPlan,
            KindArg::Recipe => Self::Recipe,
            KindArg::Tips => Self::MotivationalTips,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
    Other,
}

impl From<GenderArg> for Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
            GenderArg::Other => Self::Other,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    if let Command::Metrics(profile) = &cli.command {
        return commands::metrics::show(profile);
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(url) = &cli.database_url {
        config.database = DatabaseUrl::parse_url(url)?;
    }
    info!("{}", config.summary());

    let service = ContentService::from_config(&config).await?;

    match cli.command {
        Command::Plan(args) => commands::content::show(&service, ContentKind::DietPlan, &args).await?,
        Command::Recipe(args) => commands::content::show(&service, ContentKind::Recipe, &args).await?,
        Command::Tips(args) => {
            commands::content::show(&service, ContentKind::MotivationalTips, &args).await?;
        }
        Command::Regenerate {
            kind,
            content,
            admin_reason,
        } => {
            commands::content::regenerate(&service, kind.into(), &content, admin_reason).await?;
        }
        Command::Status { user, at } => {
            commands::content::status(&service, &user, at.as_deref()).await?;
        }
        Command::History {
            user,
            kind,
            limit,
            detailed,
        } => {
            commands::content::history(&service, &user, kind.map(Into::into), limit, detailed)
                .await?;
        }
        Command::Metrics(_) => {}
    }

    Ok(())
}
