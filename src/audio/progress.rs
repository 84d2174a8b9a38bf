use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Playback position of the current clip, shared between the monitor
/// task and the UI without locking.
#[derive(Default, Debug)]
pub struct ClipProgress {
    current_position_millis: AtomicU64,
    total_duration_millis: AtomicU64,
}

impl ClipProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_position(&self, position: Duration) {
        self.current_position_millis
            .store(position.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn set_total_duration(&self, duration: Duration) {
        self.total_duration_millis
            .store(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// (current, total), both in milliseconds. Total is zero when the
    /// decoder could not name a duration.
    pub fn get_progress(&self) -> (u64, u64) {
        (
            self.current_position_millis.load(Ordering::Relaxed),
            self.total_duration_millis.load(Ordering::Relaxed),
        )
    }

    pub fn reset(&self) {
        self.set_current_position(Duration::ZERO);
        self.set_total_duration(Duration::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_both_readings() {
        let progress = ClipProgress::new();
        progress.set_current_position(Duration::from_secs(3));
        progress.set_total_duration(Duration::from_secs(90));
        assert_eq!(progress.get_progress(), (3000, 90000));
        progress.reset();
        assert_eq!(progress.get_progress(), (0, 0));
    }
}
