use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Args;
use rust_decimal::Decimal;
use trip_core::calculations::{RouteFilter, RouteSort, rank_routes};
use trip_core::{TrafficLevel, TransportMode};

use crate::utils::{format_amount, format_duration, format_rating};

/// Compare route candidates: filter, sort, and highlight the best options.
#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Path to a routes CSV file; omit to use the shipped candidate set
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Sort order: fastest, cheapest, or best-rated
    #[arg(long)]
    pub sort: Option<String>,

    /// Only keep routes with this transport mode
    #[arg(long)]
    pub mode: Option<String>,

    /// Only keep routes at most this long, in minutes
    #[arg(long)]
    pub max_duration: Option<u32>,

    /// Only keep routes costing at most this much
    #[arg(long)]
    pub max_cost: Option<Decimal>,

    /// Accepted traffic levels (repeatable): light, moderate, heavy
    #[arg(long = "traffic")]
    pub traffic: Vec<String>,
}

fn build_filter(args: &RoutesArgs) -> Result<RouteFilter> {
    let transport_mode = args
        .mode
        .as_deref()
        .map(|s| TransportMode::parse(s).ok_or_else(|| anyhow!("unknown transport mode '{s}'")))
        .transpose()?;

    let traffic_levels = if args.traffic.is_empty() {
        None
    } else {
        Some(
            args.traffic
                .iter()
                .map(|s| {
                    TrafficLevel::parse(s).ok_or_else(|| anyhow!("unknown traffic level '{s}'"))
                })
                .collect::<Result<Vec<_>>>()?,
        )
    };

    Ok(RouteFilter {
        transport_mode,
        max_duration_minutes: args.max_duration,
        max_cost: args.max_cost,
        traffic_levels,
    })
}

pub fn run(args: &RoutesArgs) -> Result<()> {
    let candidates = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open: {}", path.display()))?;
            trip_data::routes::parse(file)
                .with_context(|| format!("failed to parse routes: {}", path.display()))?
        }
        None => trip_data::routes::builtin().context("failed to load built-in routes")?,
    };

    let mut routes = build_filter(args)?.apply(&candidates);
    if routes.is_empty() {
        println!("no routes match the given filters");
        return Ok(());
    }

    if let Some(sort) = &args.sort {
        RouteSort::parse(sort)
            .ok_or_else(|| anyhow!("unknown sort order '{sort}'"))?
            .apply(&mut routes);
    }

    let ranking = rank_routes(&routes);

    for route in &routes {
        let mut badges = Vec::new();
        if ranking.best_duration_ids.contains(&route.id) {
            badges.push("fastest");
        }
        if ranking.best_cost_ids.contains(&route.id) {
            badges.push("cheapest");
        }
        if ranking.best_rating_ids.contains(&route.id) {
            badges.push("top rated");
        }

        println!(
            "{:<18} {:<8} {:>8} {:>10} {:>6}  {}",
            route.name,
            route.transport_mode.as_str(),
            format_duration(route.duration_minutes),
            format_amount(route.cost),
            format_rating(&route.rating),
            badges.join(", ")
        );
    }

    Ok(())
}
