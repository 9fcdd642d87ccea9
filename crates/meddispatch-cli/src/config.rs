//! CLI configuration from environment and bundled data files.

use anyhow::{Context, Result};
use meddispatch_core::{Dispatch, GeofenceIndex, RestrictedAreaDef};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Restricted areas and sample scenarios from the original deployment.
const DEFAULT_RESTRICTED_AREAS: &str = include_str!("../data/restricted-areas.json");
const DEFAULT_SCENARIOS: &str = include_str!("../data/dispatch-scenarios.json");

#[derive(Debug, Clone)]
pub struct Config {
    pub route_service_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            route_service_url: env::var("MEDDISPATCH_ROUTE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }
}

/// Load the geofence index, logging one warning per skipped entry.
pub fn load_geofence(path: Option<&Path>) -> Result<GeofenceIndex> {
    let raw = match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("reading restricted areas from {}", p.display()))?,
        None => DEFAULT_RESTRICTED_AREAS.to_string(),
    };
    let defs: Vec<RestrictedAreaDef> =
        serde_json::from_str(&raw).context("parsing restricted area definitions")?;

    let (index, warnings) = GeofenceIndex::build(defs);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    Ok(index)
}

/// A named, pre-built dispatch list selectable by the operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub dispatches: Vec<Dispatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioFile {
    pub use_cases: Vec<UseCase>,
}

pub fn load_scenarios(path: Option<&Path>) -> Result<ScenarioFile> {
    let raw = match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("reading scenarios from {}", p.display()))?,
        None => DEFAULT_SCENARIOS.to_string(),
    };
    serde_json::from_str(&raw).context("parsing scenario definitions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_restricted_areas_all_load() {
        let defs: Vec<RestrictedAreaDef> =
            serde_json::from_str(DEFAULT_RESTRICTED_AREAS).unwrap();
        let count = defs.len();
        assert!(count >= 4);

        let (index, warnings) = GeofenceIndex::build(defs);
        assert!(warnings.is_empty(), "bundled data should be clean: {warnings:?}");
        assert_eq!(index.len(), count);
    }

    #[test]
    fn bundled_scenarios_parse_and_reference_valid_shapes() {
        let scenarios = load_scenarios(None).unwrap();
        assert!(!scenarios.use_cases.is_empty());
        for use_case in &scenarios.use_cases {
            assert!(!use_case.dispatches.is_empty(), "{} is empty", use_case.id);
        }
    }

    #[test]
    fn config_defaults_to_localhost_service() {
        // Only meaningful when the env var is unset, as in CI.
        if env::var("MEDDISPATCH_ROUTE_URL").is_err() {
            assert_eq!(Config::from_env().route_service_url, "http://localhost:8080");
        }
    }
}
