//! Flattens the service response into per-drone step timelines.

use crate::models::{DronePath, Point, RoutePlan};

/// A delivery confirmation revealed when the playback cursor reaches its step.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryMarker {
    pub delivery_id: u32,
    pub point: Point,
    pub reveal_step: usize,
}

/// The step-indexed sequence of positions one drone visits.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneTimeline {
    pub drone_id: u32,
    pub path: Vec<Point>,
    pub delivery_markers: Vec<DeliveryMarker>,
}

/// Normalized form of one service response.
///
/// Computed once per response and held by the consumer; a new `RoutePlan` means
/// a new `NormalizedPlan`, nothing is recomputed on read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedPlan {
    timelines: Vec<DroneTimeline>,
    max_steps: usize,
}

impl NormalizedPlan {
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let timelines: Vec<DroneTimeline> =
            plan.drone_paths.iter().map(normalize_drone).collect();
        let max_steps = timelines.iter().map(|t| t.path.len()).max().unwrap_or(0);
        Self {
            timelines,
            max_steps,
        }
    }

    pub fn timelines(&self) -> &[DroneTimeline] {
        &self.timelines
    }

    /// Maximum path length across all timelines; 0 when there are none.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

fn normalize_drone(drone: &DronePath) -> DroneTimeline {
    // Concatenate legs in flight order. Adjacent legs share their junction
    // point; only that duplicate is dropped. Repeated points inside a leg are
    // real hover moves and each one stays a step.
    let mut path: Vec<Point> = Vec::new();
    for leg in &drone.deliveries {
        let mut points = leg.flight_path.iter();
        if let (Some(last), Some(first)) = (path.last(), leg.flight_path.first()) {
            if last == first {
                points.next();
            }
        }
        path.extend(points.copied());
    }

    let mut delivery_markers = Vec::new();
    for leg in &drone.deliveries {
        let Some(delivery_id) = leg.delivery_id else {
            continue;
        };
        let Some(&point) = leg.flight_path.last() else {
            continue;
        };
        // Exact float equality on both coordinates. A destination that never
        // appears in the concatenated path is dropped, not an error.
        if let Some(reveal_step) = path.iter().position(|p| *p == point) {
            delivery_markers.push(DeliveryMarker {
                delivery_id,
                point,
                reveal_step,
            });
        }
    }

    DroneTimeline {
        drone_id: drone.drone_id,
        path,
        delivery_markers,
    }
}
