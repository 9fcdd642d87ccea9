//! Core data models for the dispatch planner.

use serde::{Deserialize, Serialize};

/// A delivery location or flight-path position in decimal degrees.
///
/// Compared by exact value equality throughout; the path normalizer relies on
/// the service echoing identical coordinates for matching positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Whether both coordinates are in valid geographic range.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Capacity and temperature requirements attached to a dispatch.
///
/// Cooling and heating are independently settable here even though input
/// surfaces may present them as a single choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRequirements {
    pub capacity: f64,
    #[serde(default)]
    pub cooling: bool,
    #[serde(default)]
    pub heating: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cost: Option<f64>,
}

/// One requested delivery with timing, requirements, and a target location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispatch {
    pub id: u32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub requirements: DispatchRequirements,
    pub delivery: Point,
}

/// Raw restricted-area definition as loaded from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestrictedAreaDef {
    pub id: u32,
    pub name: String,
    pub vertices: Vec<Point>,
}

// ========== PATH-COMPUTATION SERVICE RESPONSE ==========

/// Full response from the path-computation service.
///
/// An empty `drone_paths` is the explicit "no plan" state; `total_cost` carries
/// no such meaning (a zero-cost plan is a legitimate plan).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub drone_paths: Vec<DronePath>,
    pub total_cost: f64,
    pub total_moves: u64,
}

impl RoutePlan {
    pub fn is_empty(&self) -> bool {
        self.drone_paths.is_empty()
    }
}

/// All delivery legs flown by a single drone, in flight order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DronePath {
    pub drone_id: u32,
    pub deliveries: Vec<DeliveryLeg>,
}

/// One contiguous segment of a drone's path. `delivery_id` is `None` for legs
/// that do not end in a delivery, e.g. a return-to-base leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryLeg {
    pub delivery_id: Option<u32>,
    pub flight_path: Vec<Point>,
}
