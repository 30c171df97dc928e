//! Shared formatting utilities for UI components.

use chrono::{Local, TimeZone};

/// Format a horizontal tick value as 24-hour local wall-clock time.
///
/// The value is interpreted as milliseconds since the Unix epoch.
pub(super) fn format_tick_time(ms: f64) -> String {
    Local
        .timestamp_millis_opt(ms as i64)
        .single()
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

/// Format a latency value for the vertical axis, one decimal place.
pub(super) fn format_latency(val: f64) -> String {
    format!("{:.1}", val)
}

/// Format a statistic value with smart precision.
pub(super) fn format_stat_value(val: f64) -> String {
    if !val.is_finite() {
        return if val.is_nan() {
            "NaN".to_string()
        } else if val.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e6).contains(&abs_val) {
        format!("{:.3e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.2}", val)
    } else if abs_val >= 1.0 {
        format!("{:.4}", val)
    } else {
        format!("{:.5}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_time_is_hh_mm_ss() {
        let formatted = format_tick_time(1_722_945_600_000.0);
        let bytes = formatted.as_bytes();

        assert_eq!(formatted.len(), 8);
        assert_eq!(bytes[2], b':');
        assert_eq!(bytes[5], b':');
        for i in [0, 1, 3, 4, 6, 7] {
            assert!(bytes[i].is_ascii_digit());
        }
    }

    #[test]
    fn latency_labels_keep_one_decimal() {
        assert_eq!(format_latency(0.0), "0.0");
        assert_eq!(format_latency(7.25), "7.2");
        assert_eq!(format_latency(-1.5), "-1.5");
    }

    #[test]
    fn stat_values_use_smart_precision() {
        assert_eq!(format_stat_value(0.0), "0");
        assert_eq!(format_stat_value(1.5), "1.5000");
        assert_eq!(format_stat_value(123.456), "123.46");
        assert_eq!(format_stat_value(0.5), "0.50000");
        assert_eq!(format_stat_value(f64::NAN), "NaN");
    }
}
