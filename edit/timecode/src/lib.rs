/*!
    Core timecode types for the editorial crate ecosystem.

    This crate defines the vocabulary shared by the editorial crates — the
    timecode value type, its frame rate, and the errors their operations
    can raise. It depends on nothing beyond the error derive, so consumers
    can take it without pulling in any tooling stack.

    # Core Types

    - [`Timecode`] - A position in a frame sequence as `HH:MM:SS:FF`
    - [`FrameRate`] - Integer frames-per-second for timecode counting

    # Error Handling

    - [`ParseError`] - Strings that do not match the `HH:MM:SS:FF` shape
    - [`RangeError`] - Component or frame-count values out of range
    - [`TimecodeError`] - Either of the above, for operations that can
      fail both ways
*/

mod error;
mod rate;
mod timecode;

pub use self::error::{ParseError, RangeError, TimecodeError};
pub use self::rate::FrameRate;
pub use self::timecode::Timecode;
