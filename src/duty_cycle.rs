//! Move/stop duty cycle.
//!
//! The robot alternates between a short moving interval and a longer stopped
//! interval. The gate is sampled once per frame:
//!
//! - **Moving**: motion is allowed while `now - phase_start <= move_time`. The
//!   first sample past that switches to Stopped without moving.
//! - **Stopped**: once `now - phase_start >= stop_time` the gate switches back
//!   to Moving. The switching sample does not move either.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Current phase of the duty cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Moving,
    Stopped,
}

/// Result of sampling the gate for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Apply motion this frame
    Move,
    /// Hold position this frame
    Hold,
}

/// Time-driven Moving/Stopped state machine
#[derive(Debug, Clone)]
pub struct DutyCycle {
    move_time: Duration,
    stop_time: Duration,
    phase: Phase,
    phase_start: Duration,
    transitions: u64,
}

impl DutyCycle {
    /// Create a gate in the Moving phase starting at `now`
    pub fn new(move_time: Duration, stop_time: Duration, now: Duration) -> Self {
        Self {
            move_time,
            stop_time,
            phase: Phase::Moving,
            phase_start: now,
            transitions: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_start(&self) -> Duration {
        self.phase_start
    }

    /// Number of phase changes so far
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Sample the gate at `now`, switching phase if the interval has run out
    pub fn poll(&mut self, now: Duration) -> Gate {
        let elapsed = now.saturating_sub(self.phase_start);

        match self.phase {
            Phase::Moving if elapsed <= self.move_time => Gate::Move,
            Phase::Moving => {
                self.enter(Phase::Stopped, now);
                Gate::Hold
            }
            Phase::Stopped if elapsed >= self.stop_time => {
                self.enter(Phase::Moving, now);
                Gate::Hold
            }
            Phase::Stopped => Gate::Hold,
        }
    }

    fn enter(&mut self, phase: Phase, now: Duration) {
        log::debug!(
            "duty cycle {:?} -> {:?} at {:.3}s",
            self.phase,
            phase,
            now.as_secs_f64()
        );
        self.phase = phase;
        self.phase_start = now;
        self.transitions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn gate() -> DutyCycle {
        DutyCycle::new(ms(100), ms(2000), Duration::ZERO)
    }

    #[test]
    fn test_moves_within_move_time() {
        let mut dc = gate();
        assert_eq!(dc.poll(ms(0)), Gate::Move);
        assert_eq!(dc.poll(ms(50)), Gate::Move);
        assert_eq!(dc.poll(ms(100)), Gate::Move);
        assert_eq!(dc.phase(), Phase::Moving);
    }

    #[test]
    fn test_stops_after_move_time() {
        let mut dc = gate();
        assert_eq!(dc.poll(ms(101)), Gate::Hold);
        assert_eq!(dc.phase(), Phase::Stopped);
        assert_eq!(dc.phase_start(), ms(101));
    }

    #[test]
    fn test_full_cycle() {
        let mut dc = gate();
        dc.poll(ms(100));
        dc.poll(ms(101));
        assert_eq!(dc.phase(), Phase::Stopped);

        // 1.999s into the stop: still stopped
        assert_eq!(dc.poll(ms(2100)), Gate::Hold);
        assert_eq!(dc.phase(), Phase::Stopped);

        // Exactly stop_time elapsed: back to moving, no motion on this sample
        assert_eq!(dc.poll(ms(2101)), Gate::Hold);
        assert_eq!(dc.phase(), Phase::Moving);
        assert_eq!(dc.poll(ms(2150)), Gate::Move);
        assert_eq!(dc.transitions(), 2);
    }

    #[test]
    fn test_periodic_at_frame_rate() {
        // Sample at 10ms steps: each period is move + stop plus one sample per switch
        let mut dc = gate();
        let mut starts = Vec::new();
        let mut last = Phase::Moving;
        for step in 0..=700u64 {
            let now = ms(step * 10);
            dc.poll(now);
            if dc.phase() == Phase::Moving && last == Phase::Stopped {
                starts.push(now);
            }
            last = dc.phase();
        }
        assert_eq!(starts, vec![ms(2110), ms(4220), ms(6330)]);
    }

    #[test]
    fn test_zero_stop_time() {
        let mut dc = DutyCycle::new(ms(100), Duration::ZERO, Duration::ZERO);
        assert_eq!(dc.poll(ms(110)), Gate::Hold);
        assert_eq!(dc.poll(ms(120)), Gate::Hold);
        assert_eq!(dc.phase(), Phase::Moving);
        assert_eq!(dc.poll(ms(130)), Gate::Move);
    }
}
