/*!
    Frame rate type for timecode counting.
*/

use core::fmt;
use core::num::NonZeroU32;

use crate::error::RangeError;

/**
    Frames per second for a timecode, as a positive integer.

    Zero is unrepresentable, so every constructed rate is valid for use as
    a divisor. Fractional broadcast rates (23.976, 29.97) are an extension
    point and not modeled here; their material is counted at the nominal
    integer rate, and drop-frame compensation is out of scope.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameRate(NonZeroU32);

impl FrameRate {
    /// Film, 24 fps.
    pub const FPS_24: Self = Self::from_const(24);
    /// PAL video, 25 fps.
    pub const FPS_25: Self = Self::from_const(25);
    /// NTSC video at the non-drop nominal rate, 30 fps.
    pub const FPS_30: Self = Self::from_const(30);
    /// High frame rate film, 48 fps.
    pub const FPS_48: Self = Self::from_const(48);
    /// PAL double rate, 50 fps.
    pub const FPS_50: Self = Self::from_const(50);
    /// NTSC double rate at the non-drop nominal rate, 60 fps.
    pub const FPS_60: Self = Self::from_const(60);

    const fn from_const(fps: u32) -> Self {
        match NonZeroU32::new(fps) {
            Some(n) => Self(n),
            None => panic!("frame rate constant must be positive"),
        }
    }

    /**
        Create a frame rate from an integer fps value.

        Fails with [`RangeError::ZeroFrameRate`] when `fps` is zero.
    */
    pub fn new(fps: u32) -> Result<Self, RangeError> {
        NonZeroU32::new(fps)
            .map(Self)
            .ok_or(RangeError::ZeroFrameRate)
    }

    /**
        The fps value as a plain integer.
    */
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for FrameRate {
    type Error = RangeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonZeroU32> for FrameRate {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
