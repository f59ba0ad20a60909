//! Frame-rate resolution and `HH:MM:SS:FF` timecode formatting.
//!
//! clqtt projects store the frame rate as a fixed-point digit string scaled
//! by 100 (`"2400"` → 24 fps, `"2397"` → 23.97 fps). Anything else — absent,
//! empty, non-digit, or a value that would resolve to zero — falls back to
//! 24 fps. The fallback is silent by design; malformed rates are a field
//! anomaly, not a conversion failure.

/// A resolved, always-positive frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRate(f64);

impl FrameRate {
    /// Fallback rate used for absent or malformed `fps` fields.
    pub const DEFAULT: Self = Self(24.0);

    /// Resolve a raw `fps` field into a frame rate.
    ///
    /// The string must be non-empty and all-ASCII-digit to be honored;
    /// the numeric value is divided by 100. Everything else resolves to
    /// [`Self::DEFAULT`], including `"0"` and strings too large for `u64`.
    ///
    /// ```rust
    /// use clqtt_core::FrameRate;
    ///
    /// assert_eq!(FrameRate::resolve("2500").fps(), 25.0);
    /// assert_eq!(FrameRate::resolve("2397").fps(), 23.97);
    /// assert_eq!(FrameRate::resolve("pal").fps(), 24.0);
    /// ```
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Self::DEFAULT;
        }
        match raw.parse::<u64>() {
            #[allow(clippy::cast_precision_loss)]
            Ok(scaled) if scaled > 0 => Self(scaled as f64 / 100.0),
            _ => Self::DEFAULT,
        }
    }

    /// Frames per second as a float.
    #[must_use]
    pub const fn fps(self) -> f64 {
        self.0
    }

    /// Format a frame count as a zero-padded `HH:MM:SS:FF` timecode.
    ///
    /// Fields are floor-divided off the frame count; hours do not wrap.
    ///
    /// ```rust
    /// use clqtt_core::FrameRate;
    ///
    /// let rate = FrameRate::resolve("2400");
    /// assert_eq!(rate.timecode(0), "00:00:00:00");
    /// assert_eq!(rate.timecode(36), "00:00:01:12");
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn timecode(self, frame: u64) -> String {
        let fps = self.0;
        debug_assert!(fps > 0.0);
        let frame = frame as f64;

        let hours = (frame / (fps * 3600.0)) as u64;
        let minutes = ((frame % (fps * 3600.0)) / (fps * 60.0)) as u64;
        let seconds = ((frame % (fps * 60.0)) / fps) as u64;
        let frames = (frame % fps) as u64;

        format!("{hours:02}:{minutes:02}:{seconds:02}:{frames:02}")
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_scaled_digit_strings() {
        assert_eq!(FrameRate::resolve("2400").fps(), 24.0);
        assert_eq!(FrameRate::resolve("2500").fps(), 25.0);
        assert_eq!(FrameRate::resolve("2397").fps(), 23.97);
        assert_eq!(FrameRate::resolve("3000").fps(), 30.0);
    }

    #[test]
    fn falls_back_on_malformed_rates() {
        assert_eq!(FrameRate::resolve("").fps(), 24.0);
        assert_eq!(FrameRate::resolve("24fps").fps(), 24.0);
        assert_eq!(FrameRate::resolve("-2400").fps(), 24.0);
        assert_eq!(FrameRate::resolve("24.00").fps(), 24.0);
        assert_eq!(FrameRate::resolve("0").fps(), 24.0);
        // Digit strings beyond u64 range are malformed too.
        assert_eq!(FrameRate::resolve("99999999999999999999999").fps(), 24.0);
    }

    #[test]
    fn formats_zero_frame() {
        assert_eq!(FrameRate::DEFAULT.timecode(0), "00:00:00:00");
    }

    #[test]
    fn formats_seconds_and_frames() {
        assert_eq!(FrameRate::DEFAULT.timecode(36), "00:00:01:12");
        assert_eq!(FrameRate::DEFAULT.timecode(23), "00:00:00:23");
        assert_eq!(FrameRate::DEFAULT.timecode(24), "00:00:01:00");
    }

    #[test]
    fn formats_minute_and_hour_boundaries() {
        let rate = FrameRate::resolve("2400");
        assert_eq!(rate.timecode(24 * 60), "00:01:00:00");
        assert_eq!(rate.timecode(24 * 3600), "01:00:00:00");
        assert_eq!(rate.timecode(24 * 3600 + 24 * 61 + 5), "01:01:01:05");
    }

    #[test]
    fn hours_do_not_wrap() {
        let rate = FrameRate::resolve("2400");
        assert_eq!(rate.timecode(24 * 3600 * 100), "100:00:00:00");
    }

    #[test]
    fn fractional_rate_truncates_frame_field() {
        let rate = FrameRate::resolve("2397");
        assert_eq!(rate.timecode(23), "00:00:00:23");
        // 24 frames at 23.97 fps is just past one second.
        assert_eq!(rate.timecode(24), "00:00:01:00");
    }
}
