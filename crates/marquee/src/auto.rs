#![forbid(unsafe_code)]

//! Auto-advance scheduling.
//!
//! Deadline-based rather than timer-handle-based: the controller polls the
//! scheduler once per frame with the current instant. A pending resume
//! restarts the cadence when it elapses, so the first advance after a quiet
//! period lands one full period after the resume point — the same rhythm a
//! cleared-and-restarted interval timer produces.
//!
//! # Invariants
//!
//! 1. While paused with no pending resume, `poll` never fires.
//! 2. `cancel` (new drag) clears both the cadence and any pending resume.
//! 3. Consecutive fires are exactly one period apart, measured from the
//!    deadline rather than the poll instant, so late polls don't drift the
//!    cadence.

use web_time::{Duration, Instant};

/// Deadline-based auto-advance scheduler.
#[derive(Debug, Clone)]
pub(crate) struct AutoAdvance {
    period: Duration,
    next_due: Option<Instant>,
    resume_at: Option<Instant>,
}

impl AutoAdvance {
    /// Create a scheduler with its first fire one period from `now`.
    pub(crate) fn start(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: Some(now + period),
            resume_at: None,
        }
    }

    /// Stop firing until a resume. Clears any pending resume as well, so an
    /// explicit pause wins over an earlier scheduled resume.
    pub(crate) fn pause(&mut self) {
        self.next_due = None;
        self.resume_at = None;
    }

    /// Stop firing and drop any pending resume (a new drag began).
    pub(crate) fn cancel(&mut self) {
        self.pause();
    }

    /// Restart the cadence immediately: first fire one period from `now`.
    pub(crate) fn resume(&mut self, now: Instant) {
        self.resume_at = None;
        self.next_due = Some(now + self.period);
    }

    /// Schedule the cadence to restart after a quiet period.
    pub(crate) fn resume_after(&mut self, now: Instant, delay: Duration) {
        self.next_due = None;
        self.resume_at = Some(now + delay);
    }

    /// Whether the scheduler will fire again without intervention.
    pub(crate) fn is_pending(&self) -> bool {
        self.next_due.is_some() || self.resume_at.is_some()
    }

    /// Poll the clock. Returns `true` when an advance is due.
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        if let Some(resume_at) = self.resume_at
            && now >= resume_at
        {
            self.resume_at = None;
            self.next_due = Some(resume_at + self.period);
        }

        if let Some(due) = self.next_due
            && now >= due
        {
            self.next_due = Some(due + self.period);
            return true;
        }
        false
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(5);

    #[test]
    fn fires_one_period_after_start() {
        let t0 = Instant::now();
        let mut auto = AutoAdvance::start(PERIOD, t0);
        assert!(!auto.poll(t0));
        assert!(!auto.poll(t0 + Duration::from_secs(4)));
        assert!(auto.poll(t0 + PERIOD));
    }

    #[test]
    fn cadence_measured_from_deadline_not_poll() {
        let t0 = Instant::now();
        let mut auto = AutoAdvance::start(PERIOD, t0);
        // Late poll at t+6s fires; the next deadline is still t+10s.
        assert!(auto.poll(t0 + Duration::from_secs(6)));
        assert!(!auto.poll(t0 + Duration::from_secs(9)));
        assert!(auto.poll(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn paused_never_fires() {
        let t0 = Instant::now();
        let mut auto = AutoAdvance::start(PERIOD, t0);
        auto.pause();
        assert!(!auto.poll(t0 + Duration::from_secs(60)));
        assert!(!auto.is_pending());
    }

    #[test]
    fn resume_after_quiet_period() {
        let t0 = Instant::now();
        let mut auto = AutoAdvance::start(PERIOD, t0);
        auto.resume_after(t0, Duration::from_secs(3));

        // Quiet until the resume point; first fire one period later.
        assert!(!auto.poll(t0 + Duration::from_secs(7)));
        assert!(auto.poll(t0 + Duration::from_secs(8)));
    }

    #[test]
    fn pause_clears_pending_resume() {
        let t0 = Instant::now();
        let mut auto = AutoAdvance::start(PERIOD, t0);
        auto.resume_after(t0, Duration::from_secs(3));
        auto.pause();
        assert!(!auto.poll(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn resume_overrides_quiet_period() {
        let t0 = Instant::now();
        let mut auto = AutoAdvance::start(PERIOD, t0);
        auto.resume_after(t0, Duration::from_secs(30));
        auto.resume(t0);
        assert!(auto.poll(t0 + PERIOD));
    }

    #[test]
    fn one_fire_per_elapsed_deadline() {
        let t0 = Instant::now();
        let mut auto = AutoAdvance::start(PERIOD, t0);
        let t = t0 + PERIOD;
        assert!(auto.poll(t));
        // Immediately polling again at the same instant does not double-fire.
        assert!(!auto.poll(t));
    }
}
