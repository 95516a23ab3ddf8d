/*!
    Error types for timecode parsing and arithmetic.
*/

use thiserror::Error;

/**
    The timecode string does not match the `HH:MM:SS:FF` shape.

    Shape problems are distinct from range problems ([`RangeError`]): a
    string can be perfectly well-formed and still carry a component value
    that does not fit its slot.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 4 colon-separated fields, got {found}")]
    FieldCount { found: usize },

    #[error("{field} field {value:?} is not a valid number")]
    InvalidField { field: &'static str, value: String },

    #[error("{field} field {value:?} is not zero-padded to two digits")]
    BadPadding { field: &'static str, value: String },
}

/**
    A numeric value violates a component's valid range.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("frames component {frames} is out of range at {fps} fps")]
    FramesOutOfRange { frames: u64, fps: u32 },

    #[error("seconds component {0} is out of range (expected 0..60)")]
    SecondsOutOfRange(u64),

    #[error("minutes component {0} is out of range (expected 0..60)")]
    MinutesOutOfRange(u64),

    #[error("frame rate must be positive")]
    ZeroFrameRate,

    #[error("cannot subtract {subtrahend} frames from {minuend}")]
    Underflow { minuend: u64, subtrahend: u64 },

    #[error("frame count overflows")]
    Overflow,
}

/**
    Error for operations that can fail on either shape or range, such as
    [`Timecode::parse`].

    [`Timecode::parse`]: crate::Timecode::parse
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimecodeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Range(#[from] RangeError),
}
