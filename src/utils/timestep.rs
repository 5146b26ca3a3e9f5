use std::time::{Duration, Instant};

/// Paces the frame loop so it renders at most `frame_rate` frames per second.
pub struct Timestep {
    last_ts: Instant,         // Last timestamp processed.
    frame: u64,               // Frames completed.
    frame_duration: Duration, // Minimum duration of each frame.
}

impl Timestep {
    /// Create a Timestep for the desired frames-per-second.
    pub fn new(frame_rate: u32) -> Self {
        Self {
            last_ts: Instant::now(),
            frame: 0,
            frame_duration: Duration::from_secs(1) / frame_rate.max(1),
        }
    }

    /// Returns the number of frames completed.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Time remaining in the current frame, zero if it is already overdue.
    fn remaining(&self, now: Instant) -> Duration {
        self.frame_duration
            .saturating_sub(now.duration_since(self.last_ts))
    }

    /// Blocks until the next frame is due and updates the frame count.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }

        self.last_ts = Instant::now();
        self.frame += 1;
    }

    /// Restarts the current frame, used after a blocking flash hold.
    pub fn reset(&mut self) {
        self.last_ts = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_duration_from_rate() {
        let step = Timestep::new(50);
        assert_eq!(step.remaining(step.last_ts), Duration::from_millis(20));

        // Zero is treated as one frame per second.
        let step = Timestep::new(0);
        assert_eq!(step.remaining(step.last_ts), Duration::from_secs(1));
    }

    #[test]
    fn wait_counts_frames_and_paces() {
        let mut step = Timestep::new(200);
        let start = Instant::now();
        step.wait();
        step.wait();

        assert_eq!(step.frame(), 2);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn overdue_frame_has_no_remaining_time() {
        let step = Timestep::new(1000);
        let later = step.last_ts + Duration::from_millis(10);
        assert_eq!(step.remaining(later), Duration::ZERO);
    }
}
