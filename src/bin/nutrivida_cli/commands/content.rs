// ABOUTME: Content commands for nutrivida-cli
// ABOUTME: Handles plan/recipe/tips retrieval, forced regeneration, status, and history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

use anyhow::Result;
use nutrivida::services::{ContentService, RegenerationOutcome};
use nutrivida_core::models::{ContentKind, RegenerationAuthority};
use nutrivida_intelligence::RenderParameters;
use tracing::info;

use crate::helpers::display::{
    display_content, display_history, display_rejection, display_status,
};
use crate::helpers::time::resolve_instant;
use crate::ContentArgs;

/// Serve stored content or generate it when the cooldown has elapsed
pub async fn show(service: &ContentService, kind: ContentKind, args: &ContentArgs) -> Result<()> {
    let now = resolve_instant(service, args.at.as_deref())?;
    let params = render_parameters(args);

    let content = service
        .get_or_generate(&args.user, kind, now, &params)
        .await?;
    display_content(&content);

    Ok(())
}

/// Force new content for a user
pub async fn regenerate(
    service: &ContentService,
    kind: ContentKind,
    args: &ContentArgs,
    admin_reason: Option<String>,
) -> Result<()> {
    let now = resolve_instant(service, args.at.as_deref())?;
    let params = render_parameters(args);
    let authority =
        admin_reason.map_or(RegenerationAuthority::User, |reason| {
            RegenerationAuthority::Administrator { reason }
        });
    info!(user.id = %args.user, content.kind = %kind, "Forcing regeneration");

    match service
        .force_regenerate(&args.user, kind, now, &params, &authority)
        .await?
    {
        RegenerationOutcome::Generated(content) => display_content(&content),
        RegenerationOutcome::Rejected(violation) => display_rejection(&violation),
    }

    Ok(())
}

/// Cooldown status for every kind
pub async fn status(service: &ContentService, user: &str, at: Option<&str>) -> Result<()> {
    let now = resolve_instant(service, at)?;

    println!("\nCooldown status for {user} at {}", now.to_rfc3339());
    for kind in ContentKind::ALL {
        let state = service.availability(user, kind, now).await;
        display_status(kind, &state, now);
    }

    Ok(())
}

/// Generated history for a user
pub async fn history(
    service: &ContentService,
    user: &str,
    kind: Option<ContentKind>,
    limit: Option<u32>,
    detailed: bool,
) -> Result<()> {
    let entries = service.history(user, kind, limit).await?;
    display_history(&entries, detailed);
    Ok(())
}

fn render_parameters(args: &ContentArgs) -> RenderParameters {
    let params = args
        .calories
        .map_or_else(RenderParameters::default, RenderParameters::with_target_calories);
    match args.weeks {
        Some(weeks) => params.weeks_on_diet(weeks),
        None => params,
    }
}
