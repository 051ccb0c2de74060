/// Cancellable one-shot timer polled by the frame loop
use std::time::{Duration, Instant};

/// Wall-clock one-shot deadline.
///
/// At most one deadline is ever live: rescheduling overwrites any pending
/// one and `cancel` takes effect immediately, so a cancelled timer can
/// never fire later.
#[derive(Debug, Default)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer, replacing any pending deadline
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the deadline has passed; disarms the timer
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        timer.schedule(start, Duration::from_secs(2));

        assert!(!timer.fire(start));
        assert!(!timer.fire(start + Duration::from_millis(1999)));
        assert!(timer.fire(start + Duration::from_secs(2)));
        assert!(!timer.fire(start + Duration::from_secs(3)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_cancel_prevents_fire() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        timer.schedule(start, Duration::from_secs(1));
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.fire(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        timer.schedule(start, Duration::from_secs(1));
        timer.schedule(start, Duration::from_secs(10));

        // The first deadline no longer exists
        assert!(!timer.fire(start + Duration::from_secs(2)));
        assert!(timer.fire(start + Duration::from_secs(10)));
    }
}
