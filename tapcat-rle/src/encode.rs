//! Offline frame encoding
//!
//! Produces tables in the format [`crate::decode`] consumes. Runs of three
//! or more equal bytes become repeat segments; a run of two does too unless
//! it would split a pending literal run, where it costs the same either way.

use heapless::Vec;

use crate::frame::{LITERAL_FLAG, MAX_FRAME_LEN, MAX_RUN};

/// Errors that can occur during encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Encoded frame would not fit the one-byte length prefix
    TooLong,
    /// Output buffer too small for the encoded frame
    BufferTooSmall,
}

/// Bounded output cursor
struct Writer<'a> {
    out: &'a mut [u8],
    pos: usize,
}

impl Writer<'_> {
    fn push(&mut self, byte: u8) -> Result<(), EncodeError> {
        if self.pos >= MAX_FRAME_LEN {
            return Err(EncodeError::TooLong);
        }
        let slot = self
            .out
            .get_mut(self.pos)
            .ok_or(EncodeError::BufferTooSmall)?;
        *slot = byte;
        self.pos += 1;
        Ok(())
    }

    fn literal(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.push(LITERAL_FLAG | bytes.len() as u8)?;
        for &byte in bytes {
            self.push(byte)?;
        }
        Ok(())
    }

    fn repeat(&mut self, count: usize, fill: u8) -> Result<(), EncodeError> {
        self.push(count as u8)?;
        self.push(fill)
    }
}

/// Length of the run of equal bytes starting at `start`, capped at [`MAX_RUN`]
fn run_len(raw: &[u8], start: usize) -> usize {
    let first = raw[start];
    raw[start..]
        .iter()
        .take(MAX_RUN)
        .take_while(|&&b| b == first)
        .count()
}

/// Encode `raw` into `out`, returning the encoded length
///
/// The first byte of `out` receives the total length once encoding is done.
pub fn encode(raw: &[u8], out: &mut [u8]) -> Result<usize, EncodeError> {
    let mut w = Writer { out, pos: 0 };
    // Length prefix placeholder
    w.push(0)?;

    let mut lit_start = 0;
    let mut lit_len = 0;
    let mut i = 0;

    while i < raw.len() {
        let run = run_len(raw, i);

        if run >= 3 || (run == 2 && lit_len == 0) {
            w.literal(&raw[lit_start..lit_start + lit_len])?;
            lit_len = 0;
            w.repeat(run, raw[i])?;
            i += run;
            continue;
        }

        if lit_len == 0 {
            lit_start = i;
        }
        lit_len += 1;
        i += 1;

        if lit_len == MAX_RUN {
            w.literal(&raw[lit_start..lit_start + lit_len])?;
            lit_len = 0;
        }
    }
    w.literal(&raw[lit_start..lit_start + lit_len])?;

    let len = w.pos;
    w.out[0] = len as u8;
    Ok(len)
}

/// Encode `raw` into a heapless Vec
pub fn encode_to_vec(raw: &[u8]) -> Result<Vec<u8, MAX_FRAME_LEN>, EncodeError> {
    let mut buffer = [0u8; MAX_FRAME_LEN];
    let len = encode(raw, &mut buffer)?;
    let mut vec = Vec::new();
    vec.extend_from_slice(&buffer[..len])
        .map_err(|_| EncodeError::BufferTooSmall)?;
    Ok(vec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_repeat() {
        let encoded = encode_to_vec(&[0x5F, 0x5F]).unwrap();
        assert_eq!(encoded.as_slice(), &[0x03, 0x02, 0x5F]);
    }

    #[test]
    fn test_encode_literal() {
        let encoded = encode_to_vec(&[0xAA, 0xBB]).unwrap();
        assert_eq!(encoded.as_slice(), &[0x04, 0x82, 0xAA, 0xBB]);
    }

    #[test]
    fn test_pair_inside_literal_stays_literal() {
        let encoded = encode_to_vec(&[0x01, 0x02, 0x02, 0x03]).unwrap();
        assert_eq!(encoded.as_slice(), &[0x06, 0x84, 0x01, 0x02, 0x02, 0x03]);
    }

    #[test]
    fn test_long_run_splits() {
        let raw = [0u8; 200];
        let encoded = encode_to_vec(&raw).unwrap();
        assert_eq!(encoded.as_slice(), &[0x05, 0x7F, 0x00, 0x49, 0x00]);
    }

    #[test]
    fn test_long_literal_splits() {
        let mut raw = [0u8; 130];
        for (i, b) in raw.iter_mut().enumerate() {
            *b = i as u8;
        }
        let encoded = encode_to_vec(&raw).unwrap();

        assert_eq!(encoded.len(), 1 + 1 + 127 + 1 + 3);
        assert_eq!(encoded[1], LITERAL_FLAG | 127);
        assert_eq!(encoded[129], LITERAL_FLAG | 3);
    }

    #[test]
    fn test_empty_input() {
        let encoded = encode_to_vec(&[]).unwrap();
        assert_eq!(encoded.as_slice(), &[0x01]);
    }

    #[test]
    fn test_too_long() {
        let mut raw = [0u8; 300];
        for (i, b) in raw.iter_mut().enumerate() {
            *b = (i % 2) as u8;
        }
        assert_eq!(encode_to_vec(&raw), Err(EncodeError::TooLong));
    }

    #[test]
    fn test_buffer_too_small() {
        let mut out = [0u8; 2];
        assert_eq!(
            encode(&[0xAA, 0xBB], &mut out),
            Err(EncodeError::BufferTooSmall)
        );
    }
}
