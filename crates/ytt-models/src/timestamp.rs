//! Subtitle cue timestamp formatting.
//!
//! SRT and WebVTT share the `HH:MM:SS<sep>mmm` layout and differ only in the
//! millisecond separator.

/// Millisecond separator used by a subtitle format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MillisSeparator {
    /// `00:00:01,500` (SRT)
    Comma,
    /// `00:00:01.500` (WebVTT)
    Dot,
}

impl MillisSeparator {
    fn as_char(self) -> char {
        match self {
            MillisSeparator::Comma => ',',
            MillisSeparator::Dot => '.',
        }
    }
}

/// Split seconds into `(hours, minutes, seconds, milliseconds)`.
///
/// Milliseconds are the fractional part scaled by 1000, rounded to two
/// decimals and then truncated, so `1.5` yields 500 and `0.0015` yields 1.
/// Negative input is clamped to zero.
pub fn split_seconds(total_secs: f64) -> (u64, u64, u64, u32) {
    let total_secs = if total_secs.is_finite() { total_secs.max(0.0) } else { 0.0 };

    let whole = total_secs.trunc() as u64;
    let hours = whole / 3600;
    let mins = (whole % 3600) / 60;
    let secs = whole % 60;

    let scaled = total_secs.fract() * 1000.0;
    let millis = ((scaled * 100.0).round() / 100.0).trunc() as u32;

    (hours, mins, secs, millis.min(999))
}

/// Format seconds as a cue timestamp, e.g. `00:01:02,345`.
pub fn format_cue_timestamp(total_secs: f64, separator: MillisSeparator) -> String {
    let (hours, mins, secs, millis) = split_seconds(total_secs);
    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours,
        mins,
        secs,
        separator.as_char(),
        millis
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_seconds() {
        assert_eq!(split_seconds(0.0), (0, 0, 0, 0));
        assert_eq!(split_seconds(1.5), (0, 0, 1, 500));
        assert_eq!(split_seconds(62.25), (0, 1, 2, 250));
        assert_eq!(split_seconds(3661.001), (1, 1, 1, 1));
    }

    #[test]
    fn test_split_seconds_clamps_negative() {
        assert_eq!(split_seconds(-4.0), (0, 0, 0, 0));
        assert_eq!(split_seconds(f64::NAN), (0, 0, 0, 0));
    }

    #[test]
    fn test_srt_timestamp() {
        assert_eq!(format_cue_timestamp(0.0, MillisSeparator::Comma), "00:00:00,000");
        assert_eq!(format_cue_timestamp(1.5, MillisSeparator::Comma), "00:00:01,500");
        assert_eq!(format_cue_timestamp(5025.12, MillisSeparator::Comma), "01:23:45,120");
    }

    #[test]
    fn test_vtt_timestamp() {
        assert_eq!(format_cue_timestamp(1.5, MillisSeparator::Dot), "00:00:01.500");
        assert_eq!(format_cue_timestamp(36000.0, MillisSeparator::Dot), "10:00:00.000");
    }
}
