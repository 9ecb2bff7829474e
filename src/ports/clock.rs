//! Clock port so time-dependent logic is testable.

use crate::domain::foundation::Timestamp;

/// Source of the current time. Production uses the system clock; tests
/// pin a fixed instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// System clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(!b.is_before(&a));
    }
}
