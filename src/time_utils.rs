use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};

/// Axis label for a sample time: hour without padding, minute padded (`9:05`).
///
/// `utc_offset_minutes` shifts the label to the viewer's clock; out-of-range
/// offsets fall back to UTC.
pub fn format_time_label(unix_secs: u64, utc_offset_minutes: i32) -> String {
    let offset = utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());
    match i64::try_from(unix_secs).ok().and_then(|s| DateTime::from_timestamp(s, 0)) {
        Some(utc) => {
            let local = utc.with_timezone(&offset);
            format!("{}:{:02}", local.hour(), local.minute())
        }
        None => "--:--".to_string(),
    }
}

/// Price axis / legend formatting.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::{format_price, format_time_label};

    #[test]
    fn epoch_is_midnight_utc() {
        assert_eq!(format_time_label(0, 0), "0:00");
    }

    #[test]
    fn hour_is_not_padded_minute_is() {
        // 1970-01-01 09:05:00 UTC
        assert_eq!(format_time_label(9 * 3600 + 5 * 60, 0), "9:05");
    }

    #[test]
    fn offset_shifts_label() {
        assert_eq!(format_time_label(0, 150), "2:30");
        assert_eq!(format_time_label(3600, -60), "0:00");
    }

    #[test]
    fn invalid_offset_falls_back_to_utc() {
        assert_eq!(format_time_label(0, 100_000), "0:00");
    }

    #[test]
    fn price_has_two_decimals() {
        assert_eq!(format_price(165.0), "165.00");
        assert_eq!(format_price(3.14159), "3.14");
    }
}
