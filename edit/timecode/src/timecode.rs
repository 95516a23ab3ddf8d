/*!
    The timecode value type and its frame-rate-aware arithmetic.
*/

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Sub};
use std::time::Duration;

use crate::error::{ParseError, RangeError, TimecodeError};
use crate::rate::FrameRate;

/**
    A position in a frame sequence, expressed as `HH:MM:SS:FF` at a fixed
    frame rate.

    The canonical state is the absolute frame count from timecode zero.
    Hours, minutes, seconds, and frames are always derived from it, so the
    components can never drift out of sync with the count. Hours are
    unbounded — the type counts frames rather than wall-clock time, and
    timecodes past 24 hours are legal.

    Arithmetic between timecodes at different frame rates rescales the
    right operand into the left operand's rate domain first (see
    [`Timecode::at_rate`]), so the left operand's rate is authoritative
    for `+`, `-`, and `*`.
*/
#[derive(Clone, Copy)]
pub struct Timecode {
    total_frames: u64,
    rate: FrameRate,
}

impl Timecode {
    /**
        Parse an `HH:MM:SS:FF` string at the given frame rate.

        Each field is zero-padded to at least two digits; values that need
        more digits (hours past 99, frames at rates above 100 fps) carry
        no extra leading zeros, so parsing and formatting round-trip
        exactly.

        Shape violations — wrong field count, non-numeric field, bad
        padding — fail with [`ParseError`]. Well-formed strings whose
        component values do not fit their slots (`frames >= fps`,
        `seconds` or `minutes` past 59) fail with [`RangeError`].
    */
    pub fn parse(text: &str, rate: FrameRate) -> Result<Self, TimecodeError> {
        let fields: Vec<&str> = text.split(':').collect();
        if fields.len() != 4 {
            return Err(ParseError::FieldCount {
                found: fields.len(),
            }
            .into());
        }

        let hours = parse_field(fields[0], "hours")?;
        let minutes = parse_field(fields[1], "minutes")?;
        let seconds = parse_field(fields[2], "seconds")?;
        let frames = parse_field(fields[3], "frames")?;

        Ok(Self::from_components(hours, minutes, seconds, frames, rate)?)
    }

    /**
        Build a timecode from explicit component values.

        `minutes` and `seconds` must be below 60 and `frames` below the
        frame rate; hours are unbounded. Fails with [`RangeError`] when a
        component does not fit its slot or the resulting frame count
        overflows.
    */
    pub fn from_components(
        hours: u64,
        minutes: u64,
        seconds: u64,
        frames: u64,
        rate: FrameRate,
    ) -> Result<Self, RangeError> {
        if minutes >= 60 {
            return Err(RangeError::MinutesOutOfRange(minutes));
        }
        if seconds >= 60 {
            return Err(RangeError::SecondsOutOfRange(seconds));
        }
        if frames >= u64::from(rate.get()) {
            return Err(RangeError::FramesOutOfRange {
                frames,
                fps: rate.get(),
            });
        }

        let total_seconds = hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .and_then(|m| m.checked_mul(60))
            .and_then(|m| m.checked_add(seconds))
            .ok_or(RangeError::Overflow)?;
        let total_frames = total_seconds
            .checked_mul(u64::from(rate.get()))
            .and_then(|t| t.checked_add(frames))
            .ok_or(RangeError::Overflow)?;

        Ok(Self { total_frames, rate })
    }

    /**
        Build a timecode directly from an absolute frame count.

        Always consistent by construction: decomposition into components
        cannot fail, and negative counts are unrepresentable.
    */
    #[inline]
    pub const fn from_total_frames(total_frames: u64, rate: FrameRate) -> Self {
        Self { total_frames, rate }
    }

    /// Absolute frame count from timecode zero.
    #[inline]
    pub const fn total_frames(self) -> u64 {
        self.total_frames
    }

    /// The frame rate this timecode counts at.
    #[inline]
    pub const fn rate(self) -> FrameRate {
        self.rate
    }

    /// Hours component. Unbounded.
    #[inline]
    pub const fn hours(self) -> u64 {
        self.components().0
    }

    /// Minutes component, in `[0, 60)`.
    #[inline]
    pub const fn minutes(self) -> u32 {
        self.components().1
    }

    /// Seconds component, in `[0, 60)`.
    #[inline]
    pub const fn seconds(self) -> u32 {
        self.components().2
    }

    /// Frames component, in `[0, fps)`.
    #[inline]
    pub const fn frames(self) -> u32 {
        self.components().3
    }

    /**
        Set the hours component, holding the other components fixed.

        Hours are unbounded, so this fails only when the resulting frame
        count overflows. The timecode is unchanged on failure.
    */
    pub fn set_hours(&mut self, hours: u64) -> Result<(), RangeError> {
        let (_, m, s, f) = self.components();
        *self = Self::from_components(hours, u64::from(m), u64::from(s), u64::from(f), self.rate)?;
        Ok(())
    }

    /**
        Set the minutes component, holding the other components fixed.

        Values of 60 or more are rejected with [`RangeError`] rather than
        wrapped into hours. The timecode is unchanged on failure.
    */
    pub fn set_minutes(&mut self, minutes: u32) -> Result<(), RangeError> {
        let (h, _, s, f) = self.components();
        *self = Self::from_components(h, u64::from(minutes), u64::from(s), u64::from(f), self.rate)?;
        Ok(())
    }

    /**
        Set the seconds component, holding the other components fixed.

        Values of 60 or more are rejected with [`RangeError`] rather than
        wrapped into minutes. The timecode is unchanged on failure.
    */
    pub fn set_seconds(&mut self, seconds: u32) -> Result<(), RangeError> {
        let (h, m, _, f) = self.components();
        *self = Self::from_components(h, u64::from(m), u64::from(seconds), u64::from(f), self.rate)?;
        Ok(())
    }

    /**
        Set the frames component, holding the other components fixed.

        Values at or above the frame rate are rejected with [`RangeError`]
        rather than wrapped into seconds. The timecode is unchanged on
        failure.
    */
    pub fn set_frames(&mut self, frames: u32) -> Result<(), RangeError> {
        let (h, m, s, _) = self.components();
        *self = Self::from_components(h, u64::from(m), u64::from(s), u64::from(frames), self.rate)?;
        Ok(())
    }

    /**
        Rescale into another frame rate's domain, preserving the position
        in time rather than the raw frame count.

        Computes `round(total_frames * new_fps / old_fps)` in exact
        integer arithmetic; ties round away from zero (upward, since
        counts are non-negative). One second of material stays one second
        of material: 32 frames at 16 fps become 48 frames at 24 fps.

        Counts past `u64::MAX` saturate.
    */
    pub fn at_rate(self, rate: FrameRate) -> Self {
        let old = u128::from(self.rate.get());
        let new = u128::from(rate.get());
        let scaled = (u128::from(self.total_frames) * new + old / 2) / old;
        Self {
            total_frames: u64::try_from(scaled).unwrap_or(u64::MAX),
            rate,
        }
    }

    /**
        Add another timecode, rescaled into this timecode's rate domain.

        Returns `None` when the frame count overflows; the `+` operator
        is the unchecked form.
    */
    pub fn checked_add(self, rhs: Timecode) -> Option<Timecode> {
        let rhs = rhs.at_rate(self.rate);
        let total_frames = self.total_frames.checked_add(rhs.total_frames)?;
        Some(Self {
            total_frames,
            rate: self.rate,
        })
    }

    /**
        Subtract another timecode, rescaled into this timecode's rate
        domain.

        Unlike the `-` operator, which clamps at zero, this surfaces a
        result that would go negative as [`RangeError::Underflow`].
    */
    pub fn checked_sub(self, rhs: Timecode) -> Result<Timecode, RangeError> {
        let rhs = rhs.at_rate(self.rate);
        match self.total_frames.checked_sub(rhs.total_frames) {
            Some(total_frames) => Ok(Self {
                total_frames,
                rate: self.rate,
            }),
            None => Err(RangeError::Underflow {
                minuend: self.total_frames,
                subtrahend: rhs.total_frames,
            }),
        }
    }

    /**
        Convert to a wall-clock [`Duration`] at this timecode's rate.
    */
    pub fn to_duration(self) -> Duration {
        Duration::from_secs_f64(self.total_frames as f64 / f64::from(self.rate.get()))
    }

    const fn components(self) -> (u64, u32, u32, u32) {
        let fps = self.rate.get() as u64;
        let hours = self.total_frames / (fps * 3600);
        let mut rem = self.total_frames % (fps * 3600);
        let minutes = rem / (fps * 60);
        rem %= fps * 60;
        let seconds = rem / fps;
        let frames = rem % fps;
        (hours, minutes as u32, seconds as u32, frames as u32)
    }

    /// Frame positions of both operands cross-multiplied into a common
    /// domain, for exact rate-independent comparison.
    fn cross(self, other: Timecode) -> (u128, u128) {
        (
            u128::from(self.total_frames) * u128::from(other.rate.get()),
            u128::from(other.total_frames) * u128::from(self.rate.get()),
        )
    }
}

fn parse_field(value: &str, field: &'static str) -> Result<u64, ParseError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidField {
            field,
            value: value.to_owned(),
        });
    }
    if value.len() < 2 || (value.len() > 2 && value.starts_with('0')) {
        return Err(ParseError::BadPadding {
            field,
            value: value.to_owned(),
        });
    }
    value.parse().map_err(|_| ParseError::InvalidField {
        field,
        value: value.to_owned(),
    })
}

impl Default for Timecode {
    /// One hour at 24 fps, the film leader convention.
    fn default() -> Self {
        Self::from_total_frames(24 * 3600, FrameRate::FPS_24)
    }
}

impl Add for Timecode {
    type Output = Timecode;

    /// Frame-rate-aware addition; the result carries the left operand's
    /// rate.
    fn add(self, rhs: Timecode) -> Timecode {
        let rhs = rhs.at_rate(self.rate);
        Timecode {
            total_frames: self.total_frames + rhs.total_frames,
            rate: self.rate,
        }
    }
}

impl Add<u64> for Timecode {
    type Output = Timecode;

    /// Add a raw frame count at this timecode's rate.
    fn add(self, frames: u64) -> Timecode {
        Timecode {
            total_frames: self.total_frames + frames,
            rate: self.rate,
        }
    }
}

impl Sub for Timecode {
    type Output = Timecode;

    /// Clamps at zero; use [`Timecode::checked_sub`] to observe underflow.
    fn sub(self, rhs: Timecode) -> Timecode {
        let rhs = rhs.at_rate(self.rate);
        Timecode {
            total_frames: self.total_frames.saturating_sub(rhs.total_frames),
            rate: self.rate,
        }
    }
}

impl Sub<u64> for Timecode {
    type Output = Timecode;

    /// Subtract a raw frame count at this timecode's rate, clamping at
    /// zero.
    fn sub(self, frames: u64) -> Timecode {
        Timecode {
            total_frames: self.total_frames.saturating_sub(frames),
            rate: self.rate,
        }
    }
}

impl Mul<u32> for Timecode {
    type Output = Timecode;

    fn mul(self, factor: u32) -> Timecode {
        Timecode {
            total_frames: self.total_frames * u64::from(factor),
            rate: self.rate,
        }
    }
}

impl Mul<f64> for Timecode {
    type Output = Timecode;

    /// Rounds half away from zero; negative or NaN products clamp to
    /// zero.
    fn mul(self, factor: f64) -> Timecode {
        let scaled = (self.total_frames as f64 * factor).round().max(0.0);
        Timecode {
            total_frames: scaled as u64,
            rate: self.rate,
        }
    }
}

impl PartialEq for Timecode {
    /// Timecodes at different rates are equal when they mark the same
    /// position in time. The comparison cross-multiplies the exact frame
    /// positions, so it is symmetric regardless of which operand's rate
    /// is taken as the reference domain.
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = self.cross(*other);
        a == b
    }
}

impl Eq for Timecode {}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    /// Orders by position in time, using the same exact cross-multiplied
    /// comparison as equality.
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.cross(*other);
        a.cmp(&b)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s, fr) = self.components();
        write!(f, "{h:02}:{m:02}:{s:02}:{fr:02}")
    }
}

impl fmt::Debug for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timecode({} @ {} fps)", self, self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R24: FrameRate = FrameRate::FPS_24;

    fn r16() -> FrameRate {
        FrameRate::new(16).unwrap()
    }

    fn tc(text: &str) -> Timecode {
        Timecode::parse(text, R24).unwrap()
    }

    #[test]
    fn parse_computes_total_frames() {
        assert_eq!(tc("00:00:01:00").total_frames(), 24);
        assert_eq!(tc("01:00:00:00").total_frames(), 86_400);
        assert_eq!(tc("00:43:12:02").total_frames(), 62_210);
    }

    #[test]
    fn parse_format_round_trip() {
        for text in [
            "00:00:00:00",
            "00:00:01:23",
            "12:34:56:12",
            "99:59:59:23",
            "123:00:00:05",
        ] {
            assert_eq!(tc(text).to_string(), text);
        }
    }

    #[test]
    fn parse_rejects_wrong_field_count() {
        assert_eq!(
            Timecode::parse("00:00:00", R24),
            Err(ParseError::FieldCount { found: 3 }.into())
        );
        assert_eq!(
            Timecode::parse("00:00:00:00:00", R24),
            Err(ParseError::FieldCount { found: 5 }.into())
        );
        assert_eq!(
            Timecode::parse("", R24),
            Err(ParseError::FieldCount { found: 1 }.into())
        );
    }

    #[test]
    fn parse_rejects_non_numeric_fields() {
        for text in ["00:00:00:ab", "00:00:+1:00", "-1:00:00:00", "00::00:00"] {
            assert!(matches!(
                Timecode::parse(text, R24),
                Err(TimecodeError::Parse(ParseError::InvalidField { .. }))
            ));
        }
    }

    #[test]
    fn parse_rejects_bad_padding() {
        for text in ["0:00:00:00", "00:0:00:00", "000:00:00:00", "00:00:00:023"] {
            assert!(matches!(
                Timecode::parse(text, R24),
                Err(TimecodeError::Parse(ParseError::BadPadding { .. }))
            ));
        }
    }

    #[test]
    fn parse_accepts_wide_hours() {
        let tc = Timecode::parse("123:00:00:05", R24).unwrap();
        assert_eq!(tc.hours(), 123);
        assert_eq!(tc.frames(), 5);
    }

    #[test]
    fn parse_rejects_out_of_range_components() {
        assert_eq!(
            Timecode::parse("00:00:00:30", R24),
            Err(RangeError::FramesOutOfRange { frames: 30, fps: 24 }.into())
        );
        assert_eq!(
            Timecode::parse("00:00:75:00", R24),
            Err(RangeError::SecondsOutOfRange(75).into())
        );
        assert_eq!(
            Timecode::parse("00:61:00:00", R24),
            Err(RangeError::MinutesOutOfRange(61).into())
        );
    }

    #[test]
    fn frames_slot_follows_rate() {
        // 30 frames fits at 60 fps but not at 24
        assert!(Timecode::parse("00:00:00:30", FrameRate::FPS_60).is_ok());
        assert!(Timecode::parse("00:00:00:30", R24).is_err());
    }

    #[test]
    fn component_decomposition() {
        let tc = Timecode::from_total_frames(62_210, R24);
        assert_eq!(tc.hours(), 0);
        assert_eq!(tc.minutes(), 43);
        assert_eq!(tc.seconds(), 12);
        assert_eq!(tc.frames(), 2);
    }

    #[test]
    fn hours_are_unbounded() {
        let tc = Timecode::from_total_frames(25 * 3600 * 24, R24);
        assert_eq!(tc.hours(), 25);
        assert_eq!(tc.to_string(), "25:00:00:00");
    }

    #[test]
    fn default_is_one_hour_at_24() {
        let tc = Timecode::default();
        assert_eq!(tc, Timecode::parse("01:00:00:00", R24).unwrap());
        assert_eq!(tc.rate(), R24);
    }

    #[test]
    fn set_minutes_leaves_other_components() {
        let mut tc = tc("00:00:05:04");
        tc.set_minutes(10).unwrap();
        assert_eq!(tc.to_string(), "00:10:05:04");
        assert_eq!(tc.total_frames(), (10 * 60 + 5) * 24 + 4);
    }

    #[test]
    fn set_hours_past_a_day() {
        let mut tc = tc("01:02:03:04");
        tc.set_hours(100).unwrap();
        assert_eq!(tc.to_string(), "100:02:03:04");
    }

    #[test]
    fn set_rejects_out_of_range_and_preserves_state() {
        let mut tc = tc("00:00:05:04");
        assert_eq!(tc.set_seconds(75), Err(RangeError::SecondsOutOfRange(75)));
        assert_eq!(tc.set_minutes(60), Err(RangeError::MinutesOutOfRange(60)));
        assert_eq!(
            tc.set_frames(24),
            Err(RangeError::FramesOutOfRange { frames: 24, fps: 24 })
        );
        assert_eq!(tc.to_string(), "00:00:05:04");
    }

    #[test]
    fn set_frames_recomputes_total() {
        let mut tc = tc("00:00:05:04");
        tc.set_frames(23).unwrap();
        assert_eq!(tc.total_frames(), 5 * 24 + 23);
    }

    #[test]
    fn at_rate_preserves_time_position() {
        let b = Timecode::parse("00:00:02:00", r16()).unwrap();
        let rescaled = b.at_rate(R24);
        assert_eq!(rescaled.total_frames(), 48);
        assert_eq!(rescaled.to_string(), "00:00:02:00");
    }

    #[test]
    fn at_rate_same_rate_is_identity() {
        let tc = tc("12:34:56:12");
        assert_eq!(tc.at_rate(R24).total_frames(), tc.total_frames());
    }

    #[test]
    fn at_rate_rounds_ties_away_from_zero() {
        // 1 frame at 16 fps is 1.5 frames at 24 fps
        let tc = Timecode::from_total_frames(1, r16());
        assert_eq!(tc.at_rate(R24).total_frames(), 2);
        // 5 frames at 24 fps is 3.33 frames at 16 fps
        let tc = Timecode::from_total_frames(5, R24);
        assert_eq!(tc.at_rate(r16()).total_frames(), 3);
    }

    #[test]
    fn add_same_rate() {
        let sum = tc("00:00:01:12") + tc("00:00:02:20");
        assert_eq!(sum.to_string(), "00:00:04:08");
        assert_eq!(sum.rate(), R24);
    }

    #[test]
    fn add_cross_rate_rescales_right_operand() {
        let a = Timecode::parse("00:00:01:00", R24).unwrap();
        let b = Timecode::parse("00:00:02:00", r16()).unwrap();
        let sum = a + b;
        assert_eq!(sum.total_frames(), 72);
        assert_eq!(sum.to_string(), "00:00:03:00");
        assert_eq!(sum.rate(), R24);
    }

    #[test]
    fn add_is_commutative_at_same_rate() {
        let a = tc("00:12:00:08");
        let b = tc("01:00:30:16");
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn add_is_associative_at_same_rate() {
        let a = tc("00:00:10:01");
        let b = tc("00:02:00:02");
        let c = tc("03:00:00:03");
        assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn add_raw_frames() {
        let tc = tc("00:00:00:20") + 10u64;
        assert_eq!(tc.to_string(), "00:00:01:06");
    }

    #[test]
    fn sub_same_rate() {
        let diff = tc("00:00:04:08") - tc("00:00:02:20");
        assert_eq!(diff.to_string(), "00:00:01:12");
    }

    #[test]
    fn sub_cross_rate() {
        let a = Timecode::parse("00:00:03:00", R24).unwrap();
        let b = Timecode::parse("00:00:02:00", r16()).unwrap();
        assert_eq!((a - b).to_string(), "00:00:01:00");
    }

    #[test]
    fn sub_operator_clamps_at_zero() {
        let diff = tc("00:00:00:05") - tc("00:00:00:10");
        assert_eq!(diff.total_frames(), 0);
        let diff = tc("00:00:00:05") - 10u64;
        assert_eq!(diff.total_frames(), 0);
    }

    #[test]
    fn checked_sub_reports_underflow() {
        let result = tc("00:00:00:05").checked_sub(tc("00:00:00:10"));
        assert_eq!(
            result,
            Err(RangeError::Underflow {
                minuend: 5,
                subtrahend: 10,
            })
        );
    }

    #[test]
    fn checked_add_matches_operator() {
        let a = tc("00:00:01:00");
        let b = Timecode::parse("00:00:02:00", r16()).unwrap();
        assert_eq!(a.checked_add(b), Some(a + b));
        assert_eq!(
            Timecode::from_total_frames(u64::MAX, R24).checked_add(a),
            None
        );
    }

    #[test]
    fn mul_by_integer() {
        let tc = tc("00:00:00:20") * 2u32;
        assert_eq!(tc.total_frames(), 40);
        assert_eq!(tc.to_string(), "00:00:01:16");
    }

    #[test]
    fn mul_by_float_rounds_half_away_from_zero() {
        let tc20 = tc("00:00:00:20");
        assert_eq!((tc20 * 1.5).total_frames(), 30);
        let tc21 = Timecode::from_total_frames(21, R24);
        assert_eq!((tc21 * 0.5).total_frames(), 11);
    }

    #[test]
    fn mul_by_negative_float_clamps_to_zero() {
        assert_eq!((tc("00:00:01:00") * -1.0).total_frames(), 0);
    }

    #[test]
    fn cross_rate_equality_is_symmetric() {
        // Two seconds of material at each rate
        let a = Timecode::from_total_frames(48, R24);
        let b = Timecode::from_total_frames(32, r16());
        assert_eq!(a, b);
        assert_eq!(b, a);

        // One frame each is not the same position in time
        let a = Timecode::from_total_frames(1, R24);
        let b = Timecode::from_total_frames(1, r16());
        assert_ne!(a, b);
        assert_ne!(b, a);
    }

    #[test]
    fn ordering_follows_time_position() {
        let frame_at_24 = Timecode::from_total_frames(1, R24);
        let frame_at_16 = Timecode::from_total_frames(1, r16());
        assert!(frame_at_24 < frame_at_16);
        assert!(frame_at_16 > frame_at_24);
        assert!(tc("00:00:01:00") < tc("00:00:01:01"));
    }

    #[test]
    fn to_duration() {
        assert_eq!(tc("01:00:00:00").to_duration(), Duration::from_secs(3600));
        assert_eq!(
            Timecode::from_total_frames(12, R24).to_duration(),
            Duration::from_secs_f64(0.5)
        );
    }

    #[test]
    fn debug_echoes_constructor_form() {
        assert_eq!(
            format!("{:?}", tc("00:43:12:02")),
            "Timecode(00:43:12:02 @ 24 fps)"
        );
    }
}
