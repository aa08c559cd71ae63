/// Preamble bytes, high byte first: "DC" (0x44 0x43).
pub const PREAMBLE: [u8; 2] = [0x44, 0x43];

/// Smallest complete frame: preamble (2) + header (1) + checksum (1).
pub const MIN_FRAME_LEN: usize = 4;

/// Payload capacity of the default [`Frame`]. Matches the largest length
/// the 4-bit header field can declare.
pub const PAYLOAD_CAPACITY: usize = 15;

const NIBBLE: u8 = 0x0F;

/// Result of a single decode attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// Complete, checksum-valid frame with at least one payload byte.
    Ok,
    /// Buffer absent, too short, or truncated before the frame ended.
    NotEnoughData,
    /// Valid frame that declares zero payload bytes.
    MessageEmpty,
    /// No preamble found in the buffer.
    WrongHeader,
    /// Checksum byte does not match the computed sum.
    WrongChecksum,
    /// Declared length exceeds the output capacity and the decoder was
    /// configured with [`OversizePolicy::Reject`].
    PayloadTooLarge,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "OK",
            Outcome::NotEnoughData => "NOT_ENOUGH_DATA",
            Outcome::MessageEmpty => "MESSAGE_EMPTY",
            Outcome::WrongHeader => "WRONG_HEADER",
            Outcome::WrongChecksum => "WRONG_CHECKSUM",
            Outcome::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
        }
    }

    /// True when a structurally valid frame was found (with or without payload).
    pub fn is_frame(self) -> bool {
        matches!(self, Outcome::Ok | Outcome::MessageEmpty)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded frame with a fixed-capacity payload of `N` bytes.
///
/// Only `outcome` is meaningful unless it is [`Outcome::Ok`]; `identifier`
/// is also populated for [`Outcome::MessageEmpty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<const N: usize = PAYLOAD_CAPACITY> {
    /// How the decode attempt ended.
    pub outcome: Outcome,
    /// Low nibble of the header byte (0-15).
    pub identifier: u8,
    /// Number of meaningful payload bytes. Never exceeds `N`.
    pub data_length: u8,
    /// Payload storage; bytes past `data_length` are unspecified.
    pub payload: [u8; N],
    declared: u8,
}

impl<const N: usize> Frame<N> {
    pub(crate) fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            identifier: 0,
            data_length: 0,
            payload: [0u8; N],
            declared: 0,
        }
    }

    /// Record the header fields, clamping the stored length to `N`.
    pub(crate) fn set_header(&mut self, header: u8) {
        self.identifier = header & NIBBLE;
        self.declared = (header >> 4) & NIBBLE;
        self.data_length = self.declared.min(Self::capacity_u8());
    }

    fn capacity_u8() -> u8 {
        u8::try_from(N).unwrap_or(u8::MAX)
    }

    /// Output capacity of this frame type.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Length the sender put in the header, before clamping to capacity.
    pub fn declared_length(&self) -> u8 {
        self.declared
    }

    /// True when the declared length had to be clamped to fit the payload buffer.
    pub fn is_truncated(&self) -> bool {
        self.declared > self.data_length
    }

    /// The meaningful prefix of the payload buffer.
    pub fn payload(&self) -> &[u8] {
        &self.payload[..usize::from(self.data_length)]
    }

    pub fn is_ok(&self) -> bool {
        self.outcome == Outcome::Ok
    }

    /// Convert a failed outcome into a [`FrameError`](crate::FrameError) so
    /// callers can use `?`.
    pub fn into_result(self) -> crate::Result<Self> {
        use crate::FrameError;

        match self.outcome {
            Outcome::Ok => Ok(self),
            Outcome::NotEnoughData => Err(FrameError::NotEnoughData),
            Outcome::MessageEmpty => Err(FrameError::MessageEmpty {
                identifier: self.identifier,
            }),
            Outcome::WrongHeader => Err(FrameError::WrongHeader),
            Outcome::WrongChecksum => Err(FrameError::WrongChecksum),
            Outcome::PayloadTooLarge => Err(FrameError::PayloadTooLarge {
                declared: usize::from(self.declared),
                capacity: N,
            }),
        }
    }
}

/// Additive checksum: 8-bit sum of `bytes`, wrapping on overflow.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

/// What the decoder does when a header declares more payload bytes than
/// the output can hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OversizePolicy {
    /// Keep the first `N` bytes and skip the rest; the checksum is read at
    /// the position the sender declared and covers every byte on the wire.
    #[default]
    Truncate,
    /// Stop with [`Outcome::PayloadTooLarge`].
    Reject,
    /// Keep the first `N` bytes and read the checksum directly after them.
    /// Bit-compatible with older decoders; generally yields `WrongChecksum`.
    Legacy,
}

/// Configuration for the frame decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Handling of declared lengths above the payload capacity.
    pub oversize: OversizePolicy,
}
