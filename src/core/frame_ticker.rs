use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

pub const DEFAULT_FPS: u32 = 60;

/// Paces the frame loop. A frame that runs long skips the ticks it missed
/// instead of bursting to catch up.
pub struct FrameTicker {
    interval: Interval,
    frames: u64,
}

impl FrameTicker {
    pub fn new(fps: u32) -> Self {
        let mut interval = interval(Self::frame_duration(fps));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval, frames: 0 }
    }

    pub fn frame_duration(fps: u32) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1)))
    }

    /// Waits for the next frame and returns its index, starting at 0.
    pub async fn tick(&mut self) -> u64 {
        self.interval.tick().await;
        let frame = self.frames;
        self.frames += 1;
        frame
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(FrameTicker::frame_duration(50), Duration::from_millis(20));
        assert_eq!(FrameTicker::frame_duration(0), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_tick_counts_frames() {
        let mut ticker = FrameTicker::new(1000);

        assert_eq!(ticker.tick().await, 0);
        assert_eq!(ticker.tick().await, 1);
        assert_eq!(ticker.tick().await, 2);
        assert_eq!(ticker.frames(), 3);
    }
}
