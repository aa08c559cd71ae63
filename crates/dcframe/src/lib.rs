//! Decoding for the "DC" preamble-delimited binary frame.
//!
//! # Crate Structure
//!
//! - [`frame`] — Wire constants, the decode state machine and its result types
//!
//! The `dcframe` binary (behind the `cli` feature) decodes a single buffer
//! given as hex, a file, or stdin and reports the outcome.

/// Re-export frame types.
pub mod frame {
    pub use dcframe_frame::*;
}
