//! Sources of the current time.

use tendermint::Time;

/// Supplies the time an update is evaluated at.
///
/// An update reads the clock once, so a fixed clock makes the outcome a pure
/// function of the inputs.
pub trait HostClock {
    /// The current time.
    fn now(&self) -> Time;
}

/// Reads the system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl HostClock for SystemClock {
    fn now(&self) -> Time {
        Time::now()
    }
}

/// Always reports the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub Time);

impl HostClock for FixedClock {
    fn now(&self) -> Time {
        self.0
    }
}

impl<T: HostClock + ?Sized> HostClock for &T {
    fn now(&self) -> Time {
        (**self).now()
    }
}
