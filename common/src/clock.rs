//! [`Clock`] definitions.

use crate::{Date, DateTime};

/// Source of the current date and time.
#[derive(Clone, Copy, Debug, Default)]
pub enum Clock {
    /// Wall-clock time of the system.
    #[default]
    System,

    /// Time frozen at the given moment.
    Frozen(DateTime),
}

impl Clock {
    /// Returns the current [`DateTime`] of this [`Clock`].
    #[must_use]
    pub fn now(&self) -> DateTime {
        match self {
            Self::System => DateTime::now(),
            Self::Frozen(at) => *at,
        }
    }

    /// Returns the current UTC [`Date`] of this [`Clock`].
    #[must_use]
    pub fn today(&self) -> Date {
        self.now().date()
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::{Date, DateTime};

    use super::Clock;

    #[test]
    fn frozen_clock_does_not_move() {
        let at = DateTime::from_rfc3339("2024-05-31T18:00:00Z").unwrap();
        let clock = Clock::Frozen(at);

        assert_eq!(clock.now(), at);
        assert_eq!(clock.today(), "2024-05-31".parse::<Date>().unwrap());

        let later = Clock::Frozen(at + Duration::from_secs(6 * 60 * 60));
        assert_eq!(later.today(), "2024-06-01".parse::<Date>().unwrap());
    }
}
