//! Frame pacing state: running flag and the tempo-coupled motion clock.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule another frame.
    Continue,
    /// The loop was stopped; do not reschedule.
    Stop,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    pub dt_secs: f64,
    /// Seconds of motion, advanced by `dt * playback_rate`.
    pub motion_time: f64,
}

#[derive(Clone, Debug)]
pub struct FrameScheduler {
    running: bool,
    last_ms: Option<f64>,
    motion_time: f64,
    time_scale: f64,
    max_dt_secs: f64,
}

impl FrameScheduler {
    pub fn new(time_scale: f64, max_dt_secs: f64) -> Self {
        Self {
            running: false,
            last_ms: None,
            motion_time: 0.0,
            time_scale,
            max_dt_secs,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn motion_time(&self) -> f64 {
        self.motion_time
    }

    /// Returns `true` when the loop was stopped and the caller must start
    /// driving frames again.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        log::debug!("[frame] loop started at motion t={:.3}", self.motion_time);
        self.running = true;
        self.last_ms = None;
        true
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("[frame] loop stopped at motion t={:.3}", self.motion_time);
        }
        self.running = false;
        self.last_ms = None;
    }

    /// Advance the clocks to `now_ms`. `None` once stopped.
    pub fn advance(&mut self, now_ms: f64, playback_rate: f32) -> Option<FrameTime> {
        if !self.running {
            return None;
        }
        let dt_secs = match self.last_ms {
            Some(prev) => ((now_ms - prev) * self.time_scale).clamp(0.0, self.max_dt_secs),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.motion_time += dt_secs * playback_rate.max(0.0) as f64;
        Some(FrameTime {
            dt_secs,
            motion_time: self.motion_time,
        })
    }
}
