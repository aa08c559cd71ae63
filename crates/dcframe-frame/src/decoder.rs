//! Byte-scanning frame decoder.
//!
//! The decoder walks the input once, left to right, with an explicit cursor.
//! It never rewinds: a failed preamble match resumes the search at the next
//! byte, and a header underflow, checksum mismatch or rejected length ends the
//! scan without retrying later preambles.

use crate::codec::{
    checksum, DecoderConfig, Frame, Outcome, OversizePolicy, MIN_FRAME_LEN, PAYLOAD_CAPACITY,
    PREAMBLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    SeekPreambleHigh,
    SeekPreambleLow,
    ReadHeader,
    ReadPayload,
    ReadChecksum,
    Finished,
    Rejected,
}

impl ParseState {
    fn outcome<const N: usize>(self, frame: &Frame<N>) -> Outcome {
        match self {
            ParseState::SeekPreambleHigh | ParseState::SeekPreambleLow => Outcome::WrongHeader,
            ParseState::ReadHeader | ParseState::ReadPayload => Outcome::NotEnoughData,
            ParseState::ReadChecksum => Outcome::WrongChecksum,
            ParseState::Rejected => Outcome::PayloadTooLarge,
            ParseState::Finished if frame.data_length > 0 => Outcome::Ok,
            ParseState::Finished => Outcome::MessageEmpty,
        }
    }
}

/// Decodes single frames into a payload buffer of `N` bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameDecoder<const N: usize = PAYLOAD_CAPACITY> {
    config: DecoderConfig,
}

impl<const N: usize> FrameDecoder<N> {
    /// Create a decoder with default configuration.
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    /// Create a decoder with explicit configuration.
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Current decoder configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Scan `input` for the first frame and decode it.
    ///
    /// Buffers shorter than [`MIN_FRAME_LEN`] are answered with
    /// [`Outcome::NotEnoughData`] without reading any byte.
    pub fn decode(&self, input: &[u8]) -> Frame<N> {
        let mut frame = Frame::with_outcome(Outcome::NotEnoughData);
        if input.len() < MIN_FRAME_LEN {
            return frame;
        }

        let mut state = ParseState::SeekPreambleHigh;
        let mut start = 0usize;
        let mut offset = 0usize;

        while offset < input.len() {
            let byte = input[offset];
            match state {
                ParseState::SeekPreambleHigh => {
                    if byte == PREAMBLE[0] {
                        start = offset;
                        state = ParseState::SeekPreambleLow;
                    }
                }
                ParseState::SeekPreambleLow => {
                    state = if byte == PREAMBLE[1] {
                        ParseState::ReadHeader
                    } else {
                        ParseState::SeekPreambleHigh
                    };
                }
                ParseState::ReadHeader => {
                    frame.set_header(byte);
                    // Declared payload plus the checksum byte must follow.
                    let remaining = input.len() - offset - 1;
                    if remaining < usize::from(frame.declared_length()) + 1 {
                        break;
                    }
                    state = ParseState::ReadPayload;
                }
                ParseState::ReadPayload => {
                    let declared = usize::from(frame.declared_length());
                    let stored = usize::from(frame.data_length);
                    if stored < declared && self.config.oversize == OversizePolicy::Reject {
                        state = ParseState::Rejected;
                        break;
                    }

                    frame.payload[..stored].copy_from_slice(&input[offset..offset + stored]);
                    offset += match self.config.oversize {
                        OversizePolicy::Legacy => stored,
                        OversizePolicy::Truncate | OversizePolicy::Reject => declared,
                    };
                    state = ParseState::ReadChecksum;
                    continue;
                }
                ParseState::ReadChecksum => {
                    if checksum(&input[start..offset]) != byte {
                        break;
                    }
                    state = ParseState::Finished;
                    break;
                }
                ParseState::Finished | ParseState::Rejected => break,
            }
            offset += 1;
        }

        frame.outcome = state.outcome(&frame);
        frame
    }
}

/// Decode the first frame in `input` with the default capacity and policy.
pub fn decode(input: &[u8]) -> Frame {
    FrameDecoder::<PAYLOAD_CAPACITY>::new().decode(input)
}

/// Decode from an optional buffer and an explicit byte count.
///
/// A missing buffer or a count below [`MIN_FRAME_LEN`] yields
/// [`Outcome::NotEnoughData`]. A count larger than the buffer is bounded to
/// the buffer.
pub fn decode_buffer(input: Option<&[u8]>, length: usize) -> Frame {
    match input {
        Some(bytes) => decode(&bytes[..length.min(bytes.len())]),
        None => Frame::with_outcome(Outcome::NotEnoughData),
    }
}
