//! MedDispatch CLI - operator tools for the dispatch planner.
//!
//! The `meddispatch` binary exposes the planner over four subcommands:
//! - zones: list configured restricted areas
//! - check: containment check of one point, with highlight feedback
//! - plan: validate a scenario and submit it to the path-computation service
//! - replay: animate a previously computed plan

pub mod config;
pub mod highlight;
pub mod replay;
