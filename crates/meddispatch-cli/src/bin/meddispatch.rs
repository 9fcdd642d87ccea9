//! Operator CLI for the MedDispatch planner.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use meddispatch_cli::config::{self, Config};
use meddispatch_cli::highlight::HighlightSlot;
use meddispatch_cli::replay::{self, SavedPlan};
use meddispatch_client::RouteClient;
use meddispatch_core::{CoordVerdict, DispatchCollection, DispatchValidator, GeofenceIndex};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "meddispatch", about = "Plan and replay drone delivery dispatches")]
struct Cli {
    /// Restricted-area definitions (defaults to the bundled set)
    #[arg(long, global = true)]
    zones: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the configured restricted areas
    Zones,
    /// Check whether a coordinate pair falls inside a restricted area
    Check {
        /// Latitude, possibly partial ("55." is treated as still being typed)
        #[arg(long)]
        lat: String,
        /// Longitude, possibly partial
        #[arg(long)]
        lng: String,
    },
    /// Validate a scenario and submit it to the path-computation service
    Plan {
        /// Scenario id from the scenario file
        #[arg(long)]
        scenario: String,
        /// Scenario definitions (defaults to the bundled set)
        #[arg(long)]
        scenarios: Option<PathBuf>,
        /// Where to write the returned plan
        #[arg(long, default_value = "plan.json")]
        out: PathBuf,
    },
    /// Replay a previously computed plan as a stepped animation
    Replay {
        #[arg(long, default_value = "plan.json")]
        plan: PathBuf,
        /// Milliseconds between auto-advance ticks
        #[arg(long, default_value_t = 700)]
        cadence_ms: u64,
        /// Steps advanced per tick
        #[arg(long, default_value_t = 1)]
        step_size: usize,
        /// Start the cursor at this step
        #[arg(long, default_value_t = 0)]
        from: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let geofence = config::load_geofence(cli.zones.as_deref())?;

    match cli.command {
        Command::Zones => list_zones(&geofence),
        Command::Check { lat, lng } => check_point(&geofence, &lat, &lng).await,
        Command::Plan {
            scenario,
            scenarios,
            out,
        } => plan_scenario(&geofence, &scenario, scenarios, out).await,
        Command::Replay {
            plan,
            cadence_ms,
            step_size,
            from,
        } => replay_plan(plan, cadence_ms, step_size, from).await,
    }
}

fn list_zones(geofence: &GeofenceIndex) -> Result<()> {
    if geofence.is_empty() {
        println!("No restricted areas configured.");
        return Ok(());
    }
    for area in geofence.areas() {
        println!("{:>3}  {}  ({} vertices)", area.id, area.name, area.ring().len());
    }
    Ok(())
}

async fn check_point(geofence: &GeofenceIndex, lat: &str, lng: &str) -> Result<()> {
    let validator = DispatchValidator::new(geofence);

    match validator.check_coordinates(lat, lng) {
        CoordVerdict::Pending => println!("Coordinates incomplete; nothing to check."),
        CoordVerdict::Clear => println!("({lat}, {lng}) is clear of all restricted areas."),
        CoordVerdict::Violation { error, area_id } => {
            println!("{}", error.message);
            if let Some(area) = area_id.and_then(|id| geofence.by_id(id)) {
                let mut slot = HighlightSlot::new();
                let name = area.name.clone();
                let id = area.id;
                slot.flash(
                    || println!("\x1b[7m>> zone {id}: {name} <<\x1b[0m"),
                    move || println!("   zone {id} highlight cleared"),
                );
                slot.settle().await;
            }
        }
    }
    Ok(())
}

async fn plan_scenario(
    geofence: &GeofenceIndex,
    scenario_id: &str,
    scenarios_path: Option<PathBuf>,
    out: PathBuf,
) -> Result<()> {
    let scenarios = config::load_scenarios(scenarios_path.as_deref())?;
    let Some(use_case) = scenarios.use_cases.iter().find(|uc| uc.id == scenario_id) else {
        let known: Vec<&str> = scenarios.use_cases.iter().map(|uc| uc.id.as_str()).collect();
        bail!("unknown scenario '{scenario_id}'; available: {}", known.join(", "));
    };

    let validator = DispatchValidator::new(geofence);
    let mut collection = DispatchCollection::new();
    let warnings =
        collection.replace_all_validated(&validator, use_case.dispatches.clone());
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    if collection.is_empty() {
        bail!("scenario '{scenario_id}' has no valid dispatches");
    }
    tracing::info!(
        scenario = scenario_id,
        accepted = collection.len(),
        skipped = warnings.len(),
        "submitting dispatch set"
    );

    let client = RouteClient::new(Config::from_env().route_service_url);
    let plan = client
        .calculate_delivery_path(collection.as_slice())
        .await
        .context("path computation failed")?;

    if plan.is_empty() {
        println!("Service returned no plan for this dispatch set.");
    } else {
        println!(
            "Plan computed: {} drone(s), total cost {}, total moves {}",
            plan.drone_paths.len(),
            plan.total_cost,
            plan.total_moves
        );
    }

    let saved = SavedPlan {
        fetched_at: Utc::now(),
        scenario: scenario_id.to_string(),
        plan,
    };
    fs::write(&out, serde_json::to_string_pretty(&saved)?)
        .with_context(|| format!("writing plan to {}", out.display()))?;
    println!("Saved to {}", out.display());
    Ok(())
}

async fn replay_plan(
    path: PathBuf,
    cadence_ms: u64,
    step_size: usize,
    from: usize,
) -> Result<()> {
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading plan from {}", path.display()))?;
    let saved: SavedPlan = serde_json::from_str(&raw).context("parsing saved plan")?;

    if saved.plan.is_empty() {
        println!(
            "No plan to replay (scenario '{}', fetched {}).",
            saved.scenario, saved.fetched_at
        );
        return Ok(());
    }

    println!(
        "Replaying scenario '{}' (fetched {}), cost {}, moves {}",
        saved.scenario, saved.fetched_at, saved.plan.total_cost, saved.plan.total_moves
    );
    replay::run(&saved.plan, cadence_ms, step_size, from).await;
    Ok(())
}
