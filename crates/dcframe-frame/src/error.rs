/// Errors produced when a decode attempt did not yield a usable frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The buffer was absent, shorter than a frame, or ended mid-frame.
    #[error("not enough data for a complete frame")]
    NotEnoughData,

    /// The frame is valid but carries no payload.
    #[error("frame {identifier} has an empty payload")]
    MessageEmpty { identifier: u8 },

    /// No preamble sequence was found.
    #[error("no frame preamble (expected 0x44 0x43 \"DC\")")]
    WrongHeader,

    /// The trailing checksum byte did not match.
    #[error("frame checksum mismatch")]
    WrongChecksum,

    /// The header declared more payload than the output can hold.
    #[error("payload too large ({declared} bytes declared, capacity {capacity})")]
    PayloadTooLarge { declared: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
