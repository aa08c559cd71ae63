//! Decoder for the "DC" fixed-format binary frame.
//!
//! Every frame on the wire is laid out as:
//! - A 2-byte preamble `0x44 0x43` ("DC")
//! - A header byte: identifier in the low nibble, payload length in the high nibble
//! - Up to 15 payload bytes
//! - A 1-byte additive checksum over everything before it
//!
//! Decoding is a pure buffer-to-struct transformation: no I/O, no allocation.

pub mod codec;
pub mod decoder;
pub mod error;

pub use codec::{
    checksum, DecoderConfig, Frame, Outcome, OversizePolicy, MIN_FRAME_LEN, PAYLOAD_CAPACITY,
    PREAMBLE,
};
pub use decoder::{decode, decode_buffer, FrameDecoder};
pub use error::{FrameError, Result};
