/// Periodic callback registration on the host.
///
/// The host calls back into the container, which answers with the next
/// desired interval in seconds; `0` or negative cancels.
pub trait TimerHost {
    fn register(&mut self, interval: f32);
    fn unregister(&mut self);
}

/// Records the registered interval; the caller fires ticks by hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualTimer {
    pub interval: Option<f32>,
}

impl ManualTimer {
    pub fn is_active(&self) -> bool {
        self.interval.is_some_and(|i| i > 0.0)
    }
}

impl TimerHost for ManualTimer {
    fn register(&mut self, interval: f32) {
        self.interval = (interval > 0.0).then_some(interval);
    }

    fn unregister(&mut self) {
        self.interval = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_interval_cancels() {
        let mut t = ManualTimer::default();
        t.register(0.5);
        assert!(t.is_active());
        t.register(0.0);
        assert!(!t.is_active());
        t.register(1.0);
        t.unregister();
        assert_eq!(t.interval, None);
    }
}
