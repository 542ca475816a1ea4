//! Monotonic time source

/// Milliseconds since an arbitrary epoch. Wraps after ~49 days.
pub type Timestamp = u32;

/// Monotonic millisecond clock
///
/// All arithmetic on [`Timestamp`] values is wrapping, so a clock that rolls
/// over keeps producing correct elapsed times as long as the interval being
/// measured is shorter than the wrap period.
pub trait Clock {
    /// Current time
    fn now(&self) -> Timestamp;

    /// Milliseconds elapsed since `since`
    fn elapsed_since(&self, since: Timestamp) -> u32 {
        self.now().wrapping_sub(since)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
