use std::time::{Duration, Instant};

/// A cancellable delayed commit of a single value.
///
/// Each [`schedule`](Debouncer::schedule) replaces whatever was pending and
/// restarts the delay, so only the last value survives a burst. The caller
/// drives time by passing `now` into [`poll`](Debouncer::poll).
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value; returns the new deadline.
    pub fn schedule(&mut self, value: T, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.pending = Some((value, deadline));
        deadline
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Takes the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_value_released_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        let deadline = debouncer.schedule("egg", start);
        assert_eq!(deadline, start + DELAY);
        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(debouncer.poll(start + DELAY), Some("egg"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
    }

    #[test]
    fn test_reschedule_restarts_delay_and_keeps_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule("e", start);
        debouncer.schedule("eg", start + Duration::from_millis(200));
        debouncer.schedule("egg", start + Duration::from_millis(400));

        assert_eq!(debouncer.poll(start + Duration::from_millis(650)), None);
        assert_eq!(
            debouncer.deadline(),
            Some(start + Duration::from_millis(700))
        );
        assert_eq!(debouncer.poll(start + Duration::from_millis(700)), Some("egg"));
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule(1, start);
        debouncer.cancel();
        assert!(debouncer.deadline().is_none());
        assert_eq!(debouncer.poll(start + DELAY), None);
    }
}
