//! Dispatch field validation.
//!
//! One shared rule set backs the full pre-submit check, the incremental
//! per-keystroke coordinate check, and the structured re-validation of trusted
//! scenario data, so the paths cannot disagree on final-state verdicts.
//! Validation errors are always returned as data, never as `Err`.

use crate::geofence::GeofenceIndex;
use crate::models::{Dispatch, Point};
use std::fmt;

const CAPACITY_MSG: &str = "Capacity must be a number greater than 0";
const COORDS_MISSING_MSG: &str = "Please enter a valid longitude and latitude";
const LNG_RANGE_MSG: &str = "Longitude must be between -180 and 180";
const LAT_RANGE_MSG: &str = "Latitude must be between -90 and 90";
const MAX_COST_MSG: &str = "Max cost must be a non-negative number";

/// Form field a validation error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Capacity,
    Lng,
    Lat,
    MaxCost,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Capacity => "capacity",
            Field::Lng => "lng",
            Field::Lat => "lat",
            Field::MaxCost => "maxCost",
        };
        f.write_str(name)
    }
}

/// A single field-scoped validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Outcome of a full validation pass. Every violated rule appears in `errors`,
/// in rule order; nothing short-circuits.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Raw text field values as entered by the operator. Kept as strings so
/// mid-typing states ("", "-", "55.") are representable.
#[derive(Debug, Clone, Default)]
pub struct DispatchForm {
    pub date: String,
    pub time: String,
    pub capacity: String,
    pub cooling: bool,
    pub heating: bool,
    pub max_cost: String,
    pub lat: String,
    pub lng: String,
}

/// Outcome of the incremental coordinate check.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordVerdict {
    /// Either value is not yet a finite number; clear any shown error rather
    /// than flagging a mid-typing state.
    Pending,
    Clear,
    /// A single violation; `area_id` is set when a restricted area was hit and
    /// drives polygon highlighting.
    Violation {
        error: FieldError,
        area_id: Option<u32>,
    },
}

/// Validates candidate dispatches against field rules and the geofence set.
pub struct DispatchValidator<'a> {
    geofence: &'a GeofenceIndex,
}

impl<'a> DispatchValidator<'a> {
    pub fn new(geofence: &'a GeofenceIndex) -> Self {
        Self { geofence }
    }

    /// Full pre-submit validation of raw form input.
    ///
    /// Rule order: capacity, coordinate presence and range, geofence
    /// containment (only when both coordinates are finite and in range; the
    /// error is recorded against the longitude field by convention, for focus
    /// purposes), then optional max cost. All rules run.
    pub fn validate(&self, form: &DispatchForm) -> ValidationResult {
        let mut errors = Vec::new();

        if let Some(error) = capacity_error(parse_finite(&form.capacity)) {
            errors.push(error);
        }

        let lat = parse_finite(&form.lat);
        let lng = parse_finite(&form.lng);
        if form.lng.trim().is_empty() || form.lat.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Lng,
                message: COORDS_MISSING_MSG.to_string(),
            });
        } else {
            if let Some(error) = lng_error(lng) {
                errors.push(error);
            }
            if let Some(error) = lat_error(lat) {
                errors.push(error);
            }
        }

        if let (Some(lat), Some(lng)) = (lat, lng) {
            let point = Point::new(lat, lng);
            if point.in_range() {
                if let Some((error, _)) = self.geofence_error(point) {
                    errors.push(error);
                }
            }
        }

        if !form.max_cost.trim().is_empty() {
            if let Some(error) = max_cost_error(parse_finite(&form.max_cost)) {
                errors.push(error);
            }
        }

        ValidationResult { errors }
    }

    /// Incremental check used while the operator edits a coordinate field.
    ///
    /// Returns `Pending` (clear any shown error) until both values parse as
    /// finite numbers, then at most one violation. Built from the same rule
    /// functions as [`validate`](Self::validate), so complete inputs get the
    /// same verdict on both paths.
    pub fn check_coordinates(&self, lat: &str, lng: &str) -> CoordVerdict {
        let (Some(lat), Some(lng)) = (parse_finite(lat), parse_finite(lng)) else {
            return CoordVerdict::Pending;
        };

        if let Some(error) = lng_error(Some(lng)) {
            return CoordVerdict::Violation {
                error,
                area_id: None,
            };
        }
        if let Some(error) = lat_error(Some(lat)) {
            return CoordVerdict::Violation {
                error,
                area_id: None,
            };
        }
        if let Some((error, area_id)) = self.geofence_error(Point::new(lat, lng)) {
            return CoordVerdict::Violation {
                error,
                area_id: Some(area_id),
            };
        }

        CoordVerdict::Clear
    }

    /// Structured rules applied to an already-parsed record.
    ///
    /// Used when rebuilding a collection from trusted scenario data; a record
    /// failing here indicates broken configuration, not operator input.
    pub fn validate_dispatch(&self, dispatch: &Dispatch) -> ValidationResult {
        let mut errors = Vec::new();

        let capacity = dispatch.requirements.capacity;
        if let Some(error) = capacity_error(Some(capacity).filter(|c| c.is_finite())) {
            errors.push(error);
        }

        let delivery = dispatch.delivery;
        if let Some(error) = lng_error(Some(delivery.lng).filter(|v| v.is_finite())) {
            errors.push(error);
        }
        if let Some(error) = lat_error(Some(delivery.lat).filter(|v| v.is_finite())) {
            errors.push(error);
        }
        if delivery.is_finite() && delivery.in_range() {
            if let Some((error, _)) = self.geofence_error(delivery) {
                errors.push(error);
            }
        }

        if let Some(max_cost) = dispatch.requirements.max_cost {
            if let Some(error) = max_cost_error(Some(max_cost).filter(|c| c.is_finite())) {
                errors.push(error);
            }
        }

        ValidationResult { errors }
    }

    fn geofence_error(&self, point: Point) -> Option<(FieldError, u32)> {
        let area = self.geofence.find_containing(point)?;
        Some((
            FieldError {
                field: Field::Lng,
                message: format!("Coordinates fall inside restricted area: {}", area.name),
            },
            area.id,
        ))
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn capacity_error(capacity: Option<f64>) -> Option<FieldError> {
    match capacity {
        Some(c) if c > 0.0 => None,
        _ => Some(FieldError {
            field: Field::Capacity,
            message: CAPACITY_MSG.to_string(),
        }),
    }
}

fn lng_error(lng: Option<f64>) -> Option<FieldError> {
    match lng {
        Some(v) if (-180.0..=180.0).contains(&v) => None,
        _ => Some(FieldError {
            field: Field::Lng,
            message: LNG_RANGE_MSG.to_string(),
        }),
    }
}

fn lat_error(lat: Option<f64>) -> Option<FieldError> {
    match lat {
        Some(v) if (-90.0..=90.0).contains(&v) => None,
        _ => Some(FieldError {
            field: Field::Lat,
            message: LAT_RANGE_MSG.to_string(),
        }),
    }
}

fn max_cost_error(max_cost: Option<f64>) -> Option<FieldError> {
    match max_cost {
        Some(c) if c >= 0.0 => None,
        _ => Some(FieldError {
            field: Field::MaxCost,
            message: MAX_COST_MSG.to_string(),
        }),
    }
}
