//! Listening pace.
//!
//! The service only accepts a play report after 30 seconds of real-time
//! listening. The rest of the track is "played" at double speed.

use std::time::Duration;

use tokio::time::sleep;

use crate::api::MixService;
use crate::error::Result;

/// Real-time listening required before a play report.
pub const REPORT_AFTER: Duration = Duration::from_secs(30);

/// Speed at which the remainder of a track is played.
pub const PLAYBACK_SPEEDUP: f64 = 2.0;

/// Wait after the report: the rest of the track at double speed, never negative.
pub fn remaining_wait(play_length: f64) -> Duration {
    let remaining = (play_length - REPORT_AFTER.as_secs_f64()) / PLAYBACK_SPEEDUP;

    if remaining.is_finite() && remaining > 0.0 {
        Duration::from_secs_f64(remaining)
    } else {
        Duration::ZERO
    }
}

/// Listen to a downloaded track: wait, report it as played, then wait out the rest.
pub async fn listen<S: MixService + ?Sized>(
    service: &S,
    play_token: &str,
    mix_id: u64,
    track_id: u64,
    play_length: f64,
) -> Result<()> {
    tracing::debug!("Waiting {}s...", REPORT_AFTER.as_secs());
    sleep(REPORT_AFTER).await;

    service.report_played(play_token, mix_id, track_id).await?;

    let wait = remaining_wait(play_length);
    tracing::debug!("Waiting {}s...", wait.as_secs_f64());
    sleep(wait).await;

    Ok(())
}
