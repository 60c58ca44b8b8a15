use bevy::prelude::*;

use crate::core::constants::playback::*;

/// Frame-counter driven playback over the clips of the loaded model.
///
/// The counter advances at `elapsed * speed * 60` frames per tick and snaps
/// back to zero once it reaches the active clip's frame count. Everything the
/// animation systems pose is derived from this struct.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AnimationPlayback {
    pub frame_counts: Vec<u32>,
    pub clip_index: usize,
    pub frame: f32,
    pub speed: f32,
    pub paused: bool,
}

impl Default for AnimationPlayback {
    fn default() -> Self {
        Self {
            frame_counts: Vec::new(),
            clip_index: 0,
            frame: 0.0,
            speed: DEFAULT_SPEED,
            paused: false,
        }
    }
}

impl AnimationPlayback {
    /// Installs the clip lengths of a freshly loaded model.
    pub fn reset_for(&mut self, frame_counts: Vec<u32>) {
        *self = Self {
            frame_counts,
            ..default()
        };
    }

    pub fn has_clips(&self) -> bool {
        !self.frame_counts.is_empty()
    }

    pub fn clip_count(&self) -> usize {
        self.frame_counts.len()
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_counts.get(self.clip_index).copied().unwrap_or(0)
    }

    pub fn advance(&mut self, elapsed: f32) {
        if self.paused || !self.has_clips() {
            return;
        }

        self.frame += elapsed * self.speed * FRAMES_PER_SECOND;
        if self.frame >= self.frame_count() as f32 {
            self.frame = 0.0;
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn next_clip(&mut self) {
        if !self.has_clips() {
            return;
        }
        self.clip_index = (self.clip_index + 1) % self.clip_count();
        self.frame = 0.0;
    }

    pub fn previous_clip(&mut self) {
        if !self.has_clips() {
            return;
        }
        self.clip_index = match self.clip_index {
            0 => self.clip_count() - 1,
            index => index - 1,
        };
        self.frame = 0.0;
    }

    pub fn adjust_speed(&mut self, delta: f32) -> f32 {
        self.speed = (self.speed + delta).clamp(MIN_SPEED, MAX_SPEED);
        self.speed
    }

    /// Position of the active clip in seconds, as handed to the animation player.
    pub fn seek_seconds(&self) -> f32 {
        self.frame / FRAMES_PER_SECOND
    }

    /// Fraction of the active clip already played, in `[0, 1)`.
    pub fn progress(&self) -> f32 {
        match self.frame_count() {
            0 => 0.0,
            count => self.frame / count as f32,
        }
    }
}

/// Number of whole frames in a clip of `duration` seconds.
pub fn frame_count_for(duration: f32) -> u32 {
    (duration.max(0.0) * FRAMES_PER_SECOND).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playback(frame_counts: &[u32]) -> AnimationPlayback {
        let mut playback = AnimationPlayback::default();
        playback.reset_for(frame_counts.to_vec());
        playback
    }

    #[test]
    fn advances_by_elapsed_speed_and_rate() {
        let mut playback = playback(&[120]);
        playback.advance(0.5);
        assert!((playback.frame - 30.0).abs() < 1e-4);

        playback.adjust_speed(1.0);
        playback.advance(0.25);
        assert!((playback.frame - 60.0).abs() < 1e-4);
    }

    #[test]
    fn wraps_exactly_when_reaching_frame_count() {
        let mut playback = playback(&[30]);

        // Short of the count: still inside the clip
        playback.advance(0.25);
        assert_eq!(playback.frame, 15.0);
        playback.advance(0.125);
        assert_eq!(playback.frame, 22.5);

        // Landing exactly on the frame count wraps to zero
        playback.frame = 15.0;
        playback.advance(0.25);
        assert_eq!(playback.frame, 0.0);

        // Overshooting wraps to zero too, not to the remainder
        playback.frame = 29.0;
        playback.advance(0.5);
        assert_eq!(playback.frame, 0.0);
    }

    #[test]
    fn pause_freezes_the_counter() {
        let mut playback = playback(&[100]);
        playback.advance(0.1);
        let frozen = playback.frame;

        assert!(playback.toggle_pause());
        playback.advance(1.0);
        assert_eq!(playback.frame, frozen);

        assert!(!playback.toggle_pause());
        playback.advance(0.1);
        assert!(playback.frame > frozen);
    }

    #[test]
    fn clip_switching_wraps_and_resets_frame() {
        let mut playback = playback(&[10, 20, 30]);
        playback.frame = 5.0;

        playback.previous_clip();
        assert_eq!(playback.clip_index, 2);
        assert_eq!(playback.frame, 0.0);

        playback.frame = 7.0;
        playback.next_clip();
        assert_eq!(playback.clip_index, 0);
        assert_eq!(playback.frame, 0.0);

        playback.next_clip();
        assert_eq!(playback.clip_index, 1);
        assert_eq!(playback.frame_count(), 20);
    }

    #[test]
    fn speed_stays_within_bounds() {
        let mut playback = playback(&[10]);

        for _ in 0..1000 {
            playback.adjust_speed(SPEED_STEP);
            assert!((MIN_SPEED..=MAX_SPEED).contains(&playback.speed));
        }
        assert_eq!(playback.speed, MAX_SPEED);

        for _ in 0..1000 {
            playback.adjust_speed(-SPEED_STEP);
            assert!((MIN_SPEED..=MAX_SPEED).contains(&playback.speed));
        }
        assert_eq!(playback.speed, MIN_SPEED);

        playback.adjust_speed(-50.0);
        assert_eq!(playback.speed, MIN_SPEED);
        playback.adjust_speed(50.0);
        assert_eq!(playback.speed, MAX_SPEED);
    }

    #[test]
    fn zero_clip_models_skip_playback() {
        let mut playback = AnimationPlayback::default();
        playback.advance(1.0);
        playback.next_clip();
        playback.previous_clip();

        assert_eq!(playback.frame, 0.0);
        assert_eq!(playback.clip_index, 0);
        assert_eq!(playback.progress(), 0.0);
    }

    #[test]
    fn progress_is_fraction_of_frame_count() {
        let mut playback = playback(&[40]);
        playback.frame = 10.0;
        assert!((playback.progress() - 0.25).abs() < 1e-6);
        assert!((playback.seek_seconds() - 10.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut playback = playback(&[10, 10]);
        playback.next_clip();
        playback.adjust_speed(1.0);
        playback.toggle_pause();

        playback.reset_for(vec![5]);
        assert_eq!(playback.clip_index, 0);
        assert_eq!(playback.speed, DEFAULT_SPEED);
        assert!(!playback.paused);
        assert_eq!(playback.frame_counts, vec![5]);
    }

    #[test]
    fn frame_count_rounds_duration() {
        assert_eq!(frame_count_for(1.0), 60);
        assert_eq!(frame_count_for(0.5), 30);
        assert_eq!(frame_count_for(0.0), 0);
        assert_eq!(frame_count_for(-1.0), 0);
    }
}
