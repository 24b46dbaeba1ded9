use chrono::NaiveDateTime;

/// Short clock label for a message timestamp ("09:41").
pub fn format_message_time(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Date label used by activity lists ("2025-01-02").
pub fn format_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Rough duration label for study time given in minutes.
pub fn format_minutes(minutes: i64) -> String {
    if minutes >= 60 {
        format!("{}h {}m", minutes / 60, minutes % 60)
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn message_time_uses_short_clock() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(9, 41, 7)
            .unwrap();
        assert_eq!(format_message_time(&ts), "09:41");
        assert_eq!(format_date(&ts), "2025-01-02");
    }

    #[test]
    fn minutes_roll_over_to_hours() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h 0m");
        assert_eq!(format_minutes(135), "2h 15m");
    }
}
