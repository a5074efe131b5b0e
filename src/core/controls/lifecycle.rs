use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    ReturnToMenu,
    PowerOff,
}

/// Host-triggered reset and power-off requests, polled once per frame.
#[derive(Debug, Default)]
pub struct LifecycleSignals {
    reset: AtomicBool,
    power_off: AtomicBool,
}

impl LifecycleSignals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_reset(&self) {
        self.reset.store(true, Ordering::Release);
    }

    pub fn request_power_off(&self) {
        self.power_off.store(true, Ordering::Release);
    }

    /// Pending request, if any. Power-off takes precedence. Does not clear.
    #[must_use]
    pub fn poll(&self) -> Option<ShutdownReason> {
        if self.power_off.load(Ordering::Acquire) {
            Some(ShutdownReason::PowerOff)
        } else if self.reset.load(Ordering::Acquire) {
            Some(ShutdownReason::ReturnToMenu)
        } else {
            None
        }
    }

    pub fn clear(&self) {
        self.reset.store(false, Ordering::Release);
        self.power_off.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn no_request_by_default() {
        assert_eq!(LifecycleSignals::new().poll(), None);
    }

    #[test]
    fn reset_maps_to_return_to_menu() {
        let signals = LifecycleSignals::new();

        signals.request_reset();

        assert_eq!(signals.poll(), Some(ShutdownReason::ReturnToMenu));
        assert_eq!(signals.poll(), Some(ShutdownReason::ReturnToMenu));
    }

    #[test]
    fn power_off_wins_over_reset() {
        let signals = LifecycleSignals::new();

        signals.request_reset();
        signals.request_power_off();

        assert_eq!(signals.poll(), Some(ShutdownReason::PowerOff));
    }

    #[test]
    fn clear_drops_pending_requests() {
        let signals = LifecycleSignals::new();

        signals.request_power_off();
        signals.clear();

        assert_eq!(signals.poll(), None);
    }

    #[test]
    fn requests_from_another_thread_are_observed() {
        let signals = Arc::new(LifecycleSignals::new());
        let remote = Arc::clone(&signals);

        thread::spawn(move || remote.request_power_off())
            .join()
            .unwrap();

        assert_eq!(signals.poll(), Some(ShutdownReason::PowerOff));
    }
}
