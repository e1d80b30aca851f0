// ABOUTME: Output formatting helpers for nutrivida-cli
// ABOUTME: Provides consistent display functions for content, cooldowns, history, and metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

use chrono::{DateTime, Utc};
use nutrivida::services::{ContentOrigin, GeneratedContent};
use nutrivida_core::models::{ContentKind, CooldownViolation, GenerationHistoryEntry, UserMetrics};
use nutrivida_intelligence::availability::AvailabilityState;
use nutrivida_intelligence::metrics::BmiCategory;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Print served content followed by its provenance
pub fn display_content(content: &GeneratedContent) {
    print!("{}", content.text);
    println!("{}", "-".repeat(60));

    let origin = match content.origin {
        ContentOrigin::Cached => "served from storage",
        ContentOrigin::Fresh => "freshly generated",
        ContentOrigin::Fallback => "fallback notice (generation failed, nothing stored)",
    };
    println!("{}: {origin}", content.kind);
    println!(
        "Generated: {}",
        content.generated_at.format(TIMESTAMP_FORMAT)
    );
    if let Some(next) = content.next_eligible_at {
        println!("Next regeneration: {}", next.format(TIMESTAMP_FORMAT));
    }
}

/// Print a cooldown rejection
pub fn display_rejection(violation: &CooldownViolation) {
    println!("\nRegeneration rejected: cooldown active");
    println!("   Kind: {}", violation.kind);
    println!(
        "   Available again: {}",
        violation.next_eligible_at.format(TIMESTAMP_FORMAT)
    );
    println!("   Remaining: ~{}h", violation.remaining_hours());
    println!("\nUse --admin-reason to bypass the cooldown as an administrator.");
}

/// Print one line of cooldown status
pub fn display_status(kind: ContentKind, state: &AvailabilityState, now: DateTime<Utc>) {
    let line = match state {
        AvailabilityState::NeverGenerated => "never generated, available now".to_owned(),
        AvailabilityState::Eligible { since } => {
            format!("available since {}", since.format(TIMESTAMP_FORMAT))
        }
        AvailabilityState::Fresh { next_eligible_at } => {
            let hours = ((*next_eligible_at - now).num_minutes().max(0) + 59) / 60;
            format!(
                "cooldown active until {} (~{hours}h)",
                next_eligible_at.format(TIMESTAMP_FORMAT)
            )
        }
    };
    println!("   {:<18} {line}", kind.as_str());
}

/// Print history entries, newest first
pub fn display_history(entries: &[GenerationHistoryEntry], detailed: bool) {
    if entries.is_empty() {
        println!("No generated content yet.");
        return;
    }
    println!("{}", "=".repeat(60));
    for entry in entries {
        println!(
            "{}  {:<18} {:<15} token={}",
            entry.created_at.format(TIMESTAMP_FORMAT),
            entry.kind.as_str(),
            entry.source.as_str(),
            entry.context_token
        );
        if detailed {
            println!();
            print!("{}", entry.rendered_text);
            println!("{}", "-".repeat(60));
        }
    }
    println!("{}", "=".repeat(60));
    println!("{} entries", entries.len());
}

/// Print a metabolic profile
pub fn display_metrics(metrics: &UserMetrics, target_calories: u32, weeks_to_goal: u32) {
    println!("\nMetabolic Profile");
    println!("{}", "=".repeat(40));
    println!(
        "   BMI: {:.1} ({})",
        metrics.bmi,
        BmiCategory::from_bmi(metrics.bmi)
    );
    println!("   BMR: {} kcal/day", metrics.bmr);
    println!("   Maintenance: {} kcal/day", metrics.daily_calories);
    println!("   Weight-loss target: {target_calories} kcal/day");
    println!("   Weekly goal: {:.1} kg", metrics.weekly_goal_kg);
    println!("   Weeks to goal: {weeks_to_goal}");
}
