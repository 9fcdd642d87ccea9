//! Live path-computation service integration test.
//!
//! Run with: cargo test --test route_test -- --ignored

use meddispatch_client::RouteClient;
use meddispatch_core::{Dispatch, DispatchRequirements, Point};

fn base_url() -> String {
    std::env::var("MEDDISPATCH_TEST_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Submit a single dispatch to a running service.
#[tokio::test]
#[ignore]
async fn calculates_path_for_single_dispatch() {
    let client = RouteClient::new(base_url());

    let dispatches = vec![Dispatch {
        id: 1,
        date: "2026-02-01".to_string(),
        time: "10:00".to_string(),
        requirements: DispatchRequirements {
            capacity: 2.0,
            cooling: true,
            heating: false,
            max_cost: Some(30.0),
        },
        delivery: Point::new(55.9533, -3.1892),
    }];

    let plan = client
        .calculate_delivery_path(&dispatches)
        .await
        .expect("service should compute a plan");

    assert!(!plan.is_empty(), "expected at least one drone path");
    let delivered = plan
        .drone_paths
        .iter()
        .flat_map(|d| d.deliveries.iter())
        .any(|leg| leg.delivery_id == Some(1));
    assert!(delivered, "no drone carries a leg for dispatch 1");
}
