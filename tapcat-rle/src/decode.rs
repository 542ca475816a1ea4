//! Frame decoding
//!
//! Two decoders share the segment walk. [`decode`] trusts its input the way
//! compiled-in tables are trusted; [`decode_checked`] validates every
//! segment before writing it.

use crate::frame::LITERAL_FLAG;
use crate::sink::FrameSink;

/// Errors reported by [`decode_checked`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// No length byte
    Empty,
    /// Declared length is longer than the table
    LengthMismatch,
    /// A segment runs past the declared length
    Truncated,
    /// Decoded output would exceed the canvas
    Overflow,
}

/// A decoded segment, borrowed from the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a [u8]),
    Repeat { count: u8, fill: u8 },
}

impl Segment<'_> {
    fn output_len(&self) -> usize {
        match self {
            Segment::Literal(bytes) => bytes.len(),
            Segment::Repeat { count, .. } => *count as usize,
        }
    }

    /// Write this segment starting at `cursor`, returning the new cursor
    fn emit<S: FrameSink + ?Sized>(&self, sink: &mut S, mut cursor: u16) -> u16 {
        match *self {
            Segment::Literal(bytes) => {
                for &byte in bytes {
                    sink.write(byte, cursor);
                    cursor = cursor.wrapping_add(1);
                }
            }
            Segment::Repeat { count, fill } => {
                for _ in 0..count {
                    sink.write(fill, cursor);
                    cursor = cursor.wrapping_add(1);
                }
            }
        }
        cursor
    }
}

/// Split a control byte into (is_literal, count)
fn control(byte: u8) -> (bool, u8) {
    (byte & LITERAL_FLAG != 0, byte & !LITERAL_FLAG)
}

/// Decode a frame into `sink`, returning the number of bytes written
///
/// Reads the declared length from byte 0 and walks segments while the read
/// cursor is below it. The read cursor never passes the declared length or
/// the end of `frame`; a segment cut short by either bound ends the decode
/// after writing whatever literal bytes were available.
///
/// No output bound is enforced here: well-formed tables fill exactly one
/// canvas, and the sink decides what to do with writes beyond it.
pub fn decode<S: FrameSink + ?Sized>(frame: &[u8], sink: &mut S) -> usize {
    let Some(&declared) = frame.first() else {
        return 0;
    };
    let end = (declared as usize).min(frame.len());

    let mut i = 1;
    let mut cursor: u16 = 0;
    let mut written = 0;

    while i < end {
        let (literal, count) = control(frame[i]);
        i += 1;

        let segment = if literal {
            let take = (count as usize).min(end - i);
            let bytes = &frame[i..i + take];
            i += take;
            Segment::Literal(bytes)
        } else {
            if i >= end {
                break;
            }
            let fill = frame[i];
            i += 1;
            Segment::Repeat { count, fill }
        };

        cursor = segment.emit(sink, cursor);
        written += segment.output_len();
    }

    written
}

/// Decode a frame, rejecting anything a trusted table would never contain
///
/// Every segment is validated before any of its bytes are written, so on
/// error the sink holds exactly the output of the segments before the bad
/// one. At most `capacity` bytes are ever written.
pub fn decode_checked<S: FrameSink + ?Sized>(
    frame: &[u8],
    sink: &mut S,
    capacity: usize,
) -> Result<usize, DecodeError> {
    let &declared = frame.first().ok_or(DecodeError::Empty)?;
    let end = declared as usize;
    if end > frame.len() {
        return Err(DecodeError::LengthMismatch);
    }

    let mut i = 1;
    let mut cursor: u16 = 0;
    let mut written = 0;

    while i < end {
        let (literal, count) = control(frame[i]);
        i += 1;

        let segment = if literal {
            let stop = i + count as usize;
            if stop > end {
                return Err(DecodeError::Truncated);
            }
            let bytes = &frame[i..stop];
            i = stop;
            Segment::Literal(bytes)
        } else {
            if i >= end {
                return Err(DecodeError::Truncated);
            }
            let fill = frame[i];
            i += 1;
            Segment::Repeat { count, fill }
        };

        if written + segment.output_len() > capacity {
            return Err(DecodeError::Overflow);
        }

        cursor = segment.emit(sink, cursor);
        written += segment.output_len();
    }

    Ok(written)
}
