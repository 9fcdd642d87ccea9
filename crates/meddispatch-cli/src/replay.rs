//! Terminal replay of a computed plan.

use chrono::{DateTime, Utc};
use meddispatch_core::{NormalizedPlan, Playback, RoutePlan};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Saved output of one `plan` run, with provenance for later replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub fetched_at: DateTime<Utc>,
    pub scenario: String,
    pub plan: RoutePlan,
}

/// Drive playback from `from` to the end, rendering one frame per tick.
///
/// The loop is one sequential task: sleep for the cadence, advance, render.
/// That keeps at most one pending timer per controller.
pub async fn run(plan: &RoutePlan, cadence_ms: u64, step_size: usize, from: usize) {
    // Normalized once per response; every frame reads the same timelines.
    let normalized = NormalizedPlan::from_plan(plan);

    let mut playback = Playback::new(normalized.max_steps());
    playback.set_cadence_ms(cadence_ms);
    playback.set_step_size(step_size);
    if from > 0 {
        playback.seek_to(from);
    }
    playback.play();

    render_frame(&playback, &normalized);
    loop {
        tokio::time::sleep(Duration::from_millis(playback.cadence_ms())).await;
        let still_playing = playback.tick();
        render_frame(&playback, &normalized);
        if !still_playing {
            break;
        }
    }
}

fn render_frame(playback: &Playback, normalized: &NormalizedPlan) {
    println!("step {:>5} / {}", playback.cursor(), normalized.max_steps());
    for timeline in normalized.timelines() {
        let visible = playback.visible_path(timeline);
        let delivered: Vec<u32> = playback
            .revealed_markers(timeline)
            .map(|m| m.delivery_id)
            .collect();

        match visible.last() {
            Some(position) => println!(
                "  drone {:>3} at ({:.6}, {:.6})  delivered: {:?}",
                timeline.drone_id, position.lat, position.lng, delivered
            ),
            None => println!("  drone {:>3} awaiting departure", timeline.drone_id),
        }
    }
}
