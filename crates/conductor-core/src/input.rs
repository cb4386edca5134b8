//! Pointer samples -> speed -> playback rate, plus the Active/Idle timer.

use crate::config::{ActivityParams, RateCurve};
use crate::session::{Activity, PointerSample, Session};

impl RateCurve {
    /// Map pointer speed (px/ms) to a playback rate in `[min_rate, max_rate]`.
    ///
    /// Flat at `min_rate` below `low_speed`, linear with `mid_slope` up to
    /// `high_speed`, then continues with the gentler `tail_slope`. The
    /// segments meet at both thresholds so the curve never jumps.
    pub fn playback_rate(&self, speed: f32) -> f32 {
        let speed = if speed.is_nan() { 0.0 } else { speed.max(0.0) };
        let rate = if speed < self.low_speed {
            self.min_rate
        } else if speed <= self.high_speed {
            self.min_rate + (speed - self.low_speed) * self.mid_slope
        } else {
            let at_high = self.min_rate + (self.high_speed - self.low_speed) * self.mid_slope;
            at_high + (speed - self.high_speed) * self.tail_slope
        };
        rate.clamp(self.min_rate, self.max_rate)
    }
}

/// Pointer speed between two samples in px/ms; `None` when time did not
/// advance.
#[inline]
pub fn pointer_speed(prev: &PointerSample, next: &PointerSample) -> Option<f32> {
    let dt = next.time_ms - prev.time_ms;
    if dt <= 0.0 || dt.is_nan() {
        return None;
    }
    let distance = prev.position.distance(next.position) as f64;
    Some((distance / dt) as f32)
}

/// What a sample did to the playback rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RateUpdate {
    /// First sample of the session; nothing to measure against.
    First,
    /// Elapsed time was zero or negative; rate left unchanged.
    Skipped,
    Updated { speed: f32, rate: f32 },
}

#[derive(Clone, Debug)]
pub struct InputMapper {
    curve: RateCurve,
    activity: ActivityParams,
    idle_deadline_ms: Option<f64>,
}

impl InputMapper {
    pub fn new(curve: RateCurve, activity: ActivityParams) -> Self {
        Self {
            curve,
            activity,
            idle_deadline_ms: None,
        }
    }

    /// Deadline of the pending idle transition, if one is armed.
    pub fn idle_deadline(&self) -> Option<f64> {
        self.idle_deadline_ms
    }

    /// Handle one pointer-move sample: update the rate, remember the
    /// pointer, switch to Active and re-arm the idle deadline.
    pub fn on_sample(&mut self, session: &mut Session, sample: PointerSample) -> RateUpdate {
        let update = match session.last_sample {
            None => RateUpdate::First,
            Some(prev) => match pointer_speed(&prev, &sample) {
                Some(speed) => {
                    let rate = self.curve.playback_rate(speed);
                    session.playback_rate = rate;
                    RateUpdate::Updated { speed, rate }
                }
                None => RateUpdate::Skipped,
            },
        };
        session.pointer = Some(sample.position);
        session.last_sample = Some(sample);

        if session.activity == Activity::Idle {
            log::debug!("[input] idle -> active");
        }
        session.activity = Activity::Active;
        session.energy = self.activity.active_energy;
        session.hint_visible = false;
        self.idle_deadline_ms = Some(sample.time_ms + self.activity.idle_delay_ms);
        update
    }

    /// Called when an idle timer fires. Only the most recently armed
    /// deadline can move the session to Idle; stale timers are ignored.
    pub fn idle_elapsed(&mut self, session: &mut Session, now_ms: f64) -> bool {
        match self.idle_deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.idle_deadline_ms = None;
                self.enter_idle(session);
                true
            }
            _ => false,
        }
    }

    /// Drop to Idle immediately and cancel any pending deadline.
    pub fn force_idle(&mut self, session: &mut Session) {
        self.idle_deadline_ms = None;
        self.enter_idle(session);
    }

    fn enter_idle(&self, session: &mut Session) {
        if session.activity == Activity::Active {
            log::debug!("[input] active -> idle");
        }
        session.activity = Activity::Idle;
        session.energy = self.activity.idle_energy;
        session.hint_visible = true;
    }
}
