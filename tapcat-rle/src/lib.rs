//! Run-length encoded frame format
//!
//! Frames are stored as a length byte followed by segments:
//! ```text
//! ┌────────┬───────────────────────┬───────────────────────┬─────
//! │ LENGTH │ 0x80|n  b0 b1 .. bn-1 │ n  fill               │ ...
//! │ 1B     │ literal run           │ repeat run            │
//! └────────┴───────────────────────┴───────────────────────┴─────
//! ```
//!
//! `LENGTH` counts the whole frame including itself. A control byte with the
//! high bit set is followed by `n` bytes copied verbatim; otherwise the
//! following byte is written `n` times. Output goes to sequential display
//! memory offsets starting at zero.
//!
//! The decoder is the on-device half; the encoder is the offline half used
//! to produce frame tables and to check them.

#![no_std]
#![deny(unsafe_code)]

pub mod decode;
pub mod encode;
pub mod frame;
pub mod sink;

pub use decode::{decode, decode_checked, DecodeError};
pub use encode::{encode, encode_to_vec, EncodeError};
pub use frame::{EncodedFrame, LITERAL_FLAG, MAX_FRAME_LEN, MAX_RUN};
pub use sink::{FrameSink, RecordingSink};
