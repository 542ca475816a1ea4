//! Output targets for decoded frames

use heapless::Vec;

/// Destination for decoded bytes
///
/// `position` starts at 0 for every frame and increases by one per byte.
pub trait FrameSink {
    /// Write one decoded byte
    fn write(&mut self, byte: u8, position: u16);
}

/// Byte buffers accept writes within their bounds and drop the rest
impl FrameSink for [u8] {
    fn write(&mut self, byte: u8, position: u16) {
        if let Some(slot) = self.get_mut(position as usize) {
            *slot = byte;
        }
    }
}

impl<const N: usize> FrameSink for [u8; N] {
    fn write(&mut self, byte: u8, position: u16) {
        self.as_mut_slice().write(byte, position);
    }
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn write(&mut self, byte: u8, position: u16) {
        (**self).write(byte, position);
    }
}

/// Sink that records every `(byte, position)` write in order
///
/// Used to check write order as well as content.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink<const N: usize> {
    writes: Vec<(u8, u16), N>,
    dropped: usize,
}

impl<const N: usize> RecordingSink<N> {
    /// Create an empty recorder
    pub const fn new() -> Self {
        Self {
            writes: Vec::new(),
            dropped: 0,
        }
    }

    /// Recorded writes in arrival order
    pub fn writes(&self) -> &[(u8, u16)] {
        &self.writes
    }

    /// Recorded byte values in arrival order
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.writes.iter().map(|&(byte, _)| byte)
    }

    /// Number of writes that did not fit
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Forget all recorded writes
    pub fn clear(&mut self) {
        self.writes.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> FrameSink for RecordingSink<N> {
    fn write(&mut self, byte: u8, position: u16) {
        if self.writes.push((byte, position)).is_err() {
            self.dropped += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_sink_ignores_out_of_range() {
        let mut buf = [0u8; 2];
        buf.write(0xAA, 0);
        buf.write(0xBB, 1);
        buf.write(0xCC, 2);
        assert_eq!(buf, [0xAA, 0xBB]);
    }

    #[test]
    fn test_recording_sink_order() {
        let mut sink = RecordingSink::<4>::new();
        sink.write(1, 0);
        sink.write(2, 1);
        assert_eq!(sink.writes(), &[(1, 0), (2, 1)]);
    }

    #[test]
    fn test_recording_sink_overflow() {
        let mut sink = RecordingSink::<1>::new();
        sink.write(1, 0);
        sink.write(2, 1);
        assert_eq!(sink.writes().len(), 1);
        assert_eq!(sink.dropped(), 1);

        sink.clear();
        assert!(sink.writes().is_empty());
        assert_eq!(sink.dropped(), 0);
    }
}
