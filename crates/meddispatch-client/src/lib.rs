//! MedDispatch client - path-computation service API client
//!
//! Handles all communication with the external route planner.

pub mod client;

pub use client::{RouteClient, RouteError};
