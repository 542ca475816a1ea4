//! Encoded frame wrapper and format constants

/// Control byte flag marking a literal run
pub const LITERAL_FLAG: u8 = 0x80;

/// Longest run a single control byte can describe
pub const MAX_RUN: usize = 0x7F;

/// Longest encoded frame, bounded by the one-byte length prefix
pub const MAX_FRAME_LEN: usize = u8::MAX as usize;

/// A compiled-in run-length encoded frame
///
/// The wrapped bytes are trusted: they were produced by the offline encoder
/// and are never validated on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedFrame(&'static [u8]);

impl EncodedFrame {
    /// Wrap an encoded byte table
    pub const fn new(bytes: &'static [u8]) -> Self {
        Self(bytes)
    }

    /// Length declared by the frame's first byte (0 for an empty table)
    pub fn declared_len(&self) -> usize {
        self.0.first().copied().unwrap_or(0) as usize
    }

    /// Raw encoded bytes, including the length prefix
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EncodedFrame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "EncodedFrame[{} bytes]", self.declared_len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: [u8; 3] = [0x03, 0x02, 0x5F];

    #[test]
    fn test_declared_len() {
        let frame = EncodedFrame::new(&SAMPLE);
        assert_eq!(frame.declared_len(), 3);
        assert_eq!(frame.as_bytes(), &SAMPLE);
    }

    #[test]
    fn test_empty_table() {
        let frame = EncodedFrame::new(&[]);
        assert_eq!(frame.declared_len(), 0);
    }
}
