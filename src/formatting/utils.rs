use chrono::NaiveDate;

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// "2025-04-18" -> "Apr 18, 2025"; anything unparseable is shown as-is.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Duration column: whole minutes without the trailing ".0".
pub fn format_duration(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{} min", minutes as i64)
    } else {
        format!("{:.1} min", minutes)
    }
}

/// Leaderboard rank decoration: medals for the podium, numbers below it.
pub fn medal(rank: usize) -> String {
    match rank {
        1 => "\u{1F947}".to_string(),
        2 => "\u{1F948}".to_string(),
        3 => "\u{1F949}".to_string(),
        _ => rank.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_strings_untouched() {
        assert_eq!(truncate("yoga", 10), "yoga");
    }

    #[test]
    fn test_truncate_long_strings_get_ellipsis() {
        assert_eq!(truncate("a very long workout name", 10), "a very ...");
    }

    #[test]
    fn test_medal_podium_and_numeric() {
        assert_eq!(medal(1), "\u{1F947}");
        assert_eq!(medal(2), "\u{1F948}");
        assert_eq!(medal(3), "\u{1F949}");
        assert_eq!(medal(4), "4");
        assert_eq!(medal(17), "17");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(30.0), "30 min");
        assert_eq!(format_duration(32.5), "32.5 min");
    }

    #[test]
    fn test_format_date_fallback() {
        assert_eq!(format_date("2025-04-18"), "Apr 18, 2025");
        assert_eq!(format_date("whenever"), "whenever");
    }
}
