//! Typing activity inputs

/// Words-per-minute sample provided by the host
pub trait WpmSource {
    /// Current typing speed estimate
    fn current_wpm(&self) -> u8;
}
