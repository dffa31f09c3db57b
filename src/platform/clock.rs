//! Fixed tick gate
//!
//! The frame loop polls `ready` with the current wall-clock time; a frame
//! runs only once a full period has elapsed since the last one, otherwise it
//! is skipped. Nothing here sleeps.

use crate::consts::TICK_MS;

#[derive(Debug, Clone)]
pub struct FrameGate {
    period_ms: u64,
    last_ms: Option<u64>,
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

impl FrameGate {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            last_ms: None,
        }
    }

    /// True (and records `now_ms`) when a frame should run
    pub fn ready(&mut self, now_ms: u64) -> bool {
        let due = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.period_ms,
            None => true,
        };
        if due {
            self.last_ms = Some(now_ms);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_runs() {
        let mut gate = FrameGate::default();
        assert!(gate.ready(0));
    }

    #[test]
    fn test_skips_until_period_elapsed() {
        let mut gate = FrameGate::new(33);
        assert!(gate.ready(100));
        assert!(!gate.ready(101));
        assert!(!gate.ready(132));
        assert!(gate.ready(133));
        assert!(!gate.ready(140));
    }

    #[test]
    fn test_busy_poll_runs_once_per_period() {
        let mut gate = FrameGate::new(TICK_MS);
        let frames = (0..1000u64).filter(|&now| gate.ready(now)).count();
        // 0, 33, 66, ... 990
        assert_eq!(frames, 31);
    }

    #[test]
    fn test_clock_going_backwards_does_not_run() {
        let mut gate = FrameGate::new(33);
        assert!(gate.ready(500));
        assert!(!gate.ready(10));
    }
}
