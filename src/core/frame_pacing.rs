use bevy::prelude::*;
use std::time::{Duration, Instant};

use crate::core::resources::ViewerConfig;

/// Caps the frame loop at a fixed rate by sleeping off the unused part of
/// each frame's budget.
#[derive(Resource, Debug)]
pub struct FrameLimiter {
    pub frame_time: Duration,
    last_frame: Instant,
}

impl FrameLimiter {
    pub fn new(target_fps: f64) -> Self {
        Self {
            frame_time: Duration::from_secs_f64(1.0 / target_fps.max(1.0)),
            last_frame: Instant::now(),
        }
    }

    /// Time left in the current frame's budget, if any.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame_time.checked_sub(elapsed).filter(|left| !left.is_zero())
    }
}

pub fn init_frame_limiter(mut commands: Commands, config: Res<ViewerConfig>) {
    let limiter = FrameLimiter::new(config.target_fps);
    info!(
        "Frame rate capped at {:.0} FPS ({:?} per frame)",
        config.target_fps, limiter.frame_time
    );
    commands.insert_resource(limiter);
}

pub fn limit_frame_rate(limiter: Option<ResMut<FrameLimiter>>) {
    let Some(mut limiter) = limiter else {
        return;
    };

    if let Some(left) = limiter.remaining(limiter.last_frame.elapsed()) {
        std::thread::sleep(left);
    }
    limiter.last_frame = Instant::now();
}
