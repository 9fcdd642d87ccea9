//! Scenario loading end to end: geofence build, re-validation, collection.

use meddispatch_core::{
    Dispatch, DispatchCollection, DispatchRequirements, DispatchValidator, GeofenceIndex, Point,
    RestrictedAreaDef,
};

fn geofence() -> GeofenceIndex {
    let (index, warnings) = GeofenceIndex::build(vec![RestrictedAreaDef {
        id: 1,
        name: "Hospital Quad".to_string(),
        vertices: vec![
            Point::new(55.943, -3.190),
            Point::new(55.943, -3.186),
            Point::new(55.946, -3.186),
            Point::new(55.946, -3.190),
        ],
    }]);
    assert!(warnings.is_empty());
    index
}

fn dispatch(id: u32, delivery: Point) -> Dispatch {
    Dispatch {
        id,
        date: "2026-02-01".to_string(),
        time: "10:00".to_string(),
        requirements: DispatchRequirements {
            capacity: 2.0,
            cooling: id % 2 == 0,
            heating: false,
            max_cost: Some(30.0),
        },
        delivery,
    }
}

#[test]
fn scenario_load_drops_only_the_dispatch_inside_a_restricted_area() {
    let index = geofence();
    let validator = DispatchValidator::new(&index);
    let mut collection = DispatchCollection::new();

    let scenario = vec![
        dispatch(1, Point::new(55.950, -3.180)),
        dispatch(2, Point::new(55.9445, -3.188)), // inside Hospital Quad
        dispatch(3, Point::new(55.938, -3.195)),
    ];

    let warnings = collection.replace_all_validated(&validator, scenario);

    let ids: Vec<u32> = collection.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("dispatch 2"));
    assert!(warnings[0].contains("Hospital Quad"));
}

#[test]
fn scenario_load_replaces_previous_contents() {
    let index = geofence();
    let validator = DispatchValidator::new(&index);
    let mut collection = DispatchCollection::new();

    collection.append(dispatch(9, Point::new(55.950, -3.180))).unwrap();
    let warnings =
        collection.replace_all_validated(&validator, vec![dispatch(1, Point::new(55.950, -3.180))]);

    assert!(warnings.is_empty());
    let ids: Vec<u32> = collection.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn scenario_load_rejects_colliding_ids_loudly() {
    let index = geofence();
    let validator = DispatchValidator::new(&index);
    let mut collection = DispatchCollection::new();

    let warnings = collection.replace_all_validated(
        &validator,
        vec![
            dispatch(1, Point::new(55.950, -3.180)),
            dispatch(1, Point::new(55.938, -3.195)),
        ],
    );

    assert_eq!(collection.len(), 1);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("already present"));
}
