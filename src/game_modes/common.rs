//! Helpers for the frame loop

use std::time::{Duration, Instant};

/// Time budget of one frame at `target_fps`
pub fn frame_duration(target_fps: u32) -> Duration {
    Duration::from_secs(1) / target_fps.max(1)
}

/// Sleep for whatever is left of the frame that began at `frame_start`.
///
/// Call at the end of each loop iteration. A frame that overran its budget
/// returns immediately.
pub fn limit_frame_rate(frame_start: Instant, frame_duration: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame_duration {
        std::thread::sleep(frame_duration - elapsed);
    }
}
