//! Core planning logic for the MedDispatch drone delivery planner.
//!
//! Geofence containment, dispatch validation, and the playback state machine
//! live here. Map rendering and the path-computation algorithm are external
//! collaborators; this crate only models their inputs and outputs.

pub mod collection;
pub mod geofence;
pub mod geometry;
pub mod models;
pub mod playback;
pub mod timeline;
pub mod validator;

pub use collection::{CollectionError, DispatchCollection};
pub use geofence::{GeofenceIndex, RestrictedArea};
pub use models::{
    DeliveryLeg, Dispatch, DispatchRequirements, DronePath, Point, RestrictedAreaDef, RoutePlan,
};
pub use playback::Playback;
pub use timeline::{DeliveryMarker, DroneTimeline, NormalizedPlan};
pub use validator::{
    CoordVerdict, DispatchForm, DispatchValidator, Field, FieldError, ValidationResult,
};
