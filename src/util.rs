//! Shared utilities

// ============================================================================
// Frame Timer
// ============================================================================

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Summary of the frames currently in a [`FrameTimer`] window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frames: usize,
    pub avg_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl FrameStats {
    /// Frame rate implied by the average frame time
    pub fn fps(&self) -> f64 {
        if self.avg_ms > 0.0 {
            1000.0 / self.avg_ms
        } else {
            0.0
        }
    }
}

/// Render time tracker with a rolling window plus a lifetime average
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    sample_count: usize,
    total: Duration,
    total_frames: u64,
}

impl FrameTimer {
    /// Create a timer that keeps the last `sample_count` frames
    pub fn new(sample_count: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(sample_count),
            sample_count: sample_count.max(1),
            total: Duration::ZERO,
            total_frames: 0,
        }
    }

    pub fn record(&mut self, frame: Duration) {
        self.frame_times.push_back(frame);
        if self.frame_times.len() > self.sample_count {
            self.frame_times.pop_front();
        }
        self.total += frame;
        self.total_frames += 1;
    }

    /// Run `f` and record how long it took
    pub fn time<R>(&mut self, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let result = f();
        self.record(start.elapsed());
        result
    }

    /// Stats over the rolling window, `None` before the first frame
    pub fn stats(&self) -> Option<FrameStats> {
        if self.frame_times.is_empty() {
            return None;
        }
        let ms = |d: &Duration| d.as_secs_f64() * 1000.0;
        let sum: f64 = self.frame_times.iter().map(ms).sum();
        let min_ms = self.frame_times.iter().map(ms).fold(f64::INFINITY, f64::min);
        let max_ms = self.frame_times.iter().map(ms).fold(0.0, f64::max);
        Some(FrameStats {
            frames: self.frame_times.len(),
            avg_ms: sum / self.frame_times.len() as f64,
            min_ms,
            max_ms,
        })
    }

    /// Average frame time in milliseconds since the timer was created
    pub fn overall_avg_ms(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        self.total.as_secs_f64() * 1000.0 / self.total_frames as f64
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Forget the rolling window; lifetime totals are kept
    pub fn clear_window(&mut self) {
        self.frame_times.clear();
    }
}
