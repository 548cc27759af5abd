//! Number and duration formatting for reports

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;
const MINUTES_PER_MONTH: u64 = 30 * MINUTES_PER_DAY;
const MINUTES_PER_YEAR: u64 = 365 * MINUTES_PER_DAY;

/// Placeholder shown for values that cannot be displayed
pub const MISSING: &str = "–";

/// Fixed decimal places, or the placeholder for non-finite values
pub fn format_fixed(n: f64, decimals: usize) -> String {
    if n.is_finite() {
        format!("{:.*}", decimals, n)
    } else {
        MISSING.to_string()
    }
}

/// Fixed decimal places with comma thousand separators
pub fn format_thousands(n: f64, decimals: usize) -> String {
    if !n.is_finite() {
        return MISSING.to_string();
    }

    let fixed = format!("{:.*}", decimals, n.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if n < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// "Ym" under an hour, "Xh Ym" otherwise
pub fn format_minutes(minutes: f64) -> String {
    if !minutes.is_finite() || minutes <= 0.0 {
        return MISSING.to_string();
    }

    let total = minutes.round() as u64;
    if total < 60 {
        format!("{}m", total)
    } else {
        format!("{}h {}m", total / 60, total % 60)
    }
}

fn plural(count: u64, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

/// "1 unit" / "15 units"
pub fn format_units(count: u64) -> String {
    plural(count, "unit", "units")
}

/// Long duration breakdown: years, months, days, hours and minutes, followed
/// by the total hours
pub fn format_training_time(hours: f64) -> String {
    if !hours.is_finite() || hours < 0.0 {
        return MISSING.to_string();
    }

    // Whole minutes, rounded up; the epsilon absorbs float noise such as 2.1 * 60
    let total = (hours * 60.0 - 1e-9).ceil().max(0.0) as u64;
    if total < MINUTES_PER_HOUR {
        return format!("{} ({:.1} hours)", plural(total, "minute", "minutes"), hours);
    }

    let mut parts = Vec::new();
    let mut remaining = total;

    for (size, one, many) in [
        (MINUTES_PER_YEAR, "year", "years"),
        (MINUTES_PER_MONTH, "month", "months"),
        (MINUTES_PER_DAY, "day", "days"),
    ] {
        let count = remaining / size;
        if count > 0 {
            parts.push(plural(count, one, many));
            remaining %= size;
        }
    }

    let whole_hours = remaining / MINUTES_PER_HOUR;
    if whole_hours > 0 {
        parts.push(format!("{}h", whole_hours));
    }
    let minutes = remaining % MINUTES_PER_HOUR;
    if minutes > 0 {
        parts.push(format!("{}min", minutes));
    }

    format!("{} ({:.1} hours)", parts.join(" "), hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(1.23456, 2), "1.23");
        assert_eq!(format_fixed(1.6, 3), "1.600");
        assert_eq!(format_fixed(f64::INFINITY, 2), MISSING);
        assert_eq!(format_fixed(f64::NAN, 2), MISSING);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0, 0), "0");
        assert_eq!(format_thousands(999.0, 0), "999");
        assert_eq!(format_thousands(1_000.0, 0), "1,000");
        assert_eq!(format_thousands(1_847.826, 2), "1,847.83");
        assert_eq!(format_thousands(1_234_567.0, 0), "1,234,567");
        assert_eq!(format_thousands(-25_000.0, 0), "-25,000");
        assert_eq!(format_thousands(-0.001, 0), "0");
        assert_eq!(format_thousands(f64::INFINITY, 0), MISSING);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0.0), MISSING);
        assert_eq!(format_minutes(-3.0), MISSING);
        assert_eq!(format_minutes(45.4), "45m");
        assert_eq!(format_minutes(108.0), "1h 48m");
        assert_eq!(format_minutes(720.0), "12h 0m");
        assert_eq!(format_minutes(864.0), "14h 24m");
        assert_eq!(format_minutes(119.8), "2h 0m");
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(1), "1 unit");
        assert_eq!(format_units(0), "0 units");
        assert_eq!(format_units(15), "15 units");
    }

    #[test]
    fn test_format_training_time() {
        assert_eq!(format_training_time(0.5), "30 minutes (0.5 hours)");
        assert_eq!(format_training_time(1.0 / 60.0), "1 minute (0.0 hours)");
        assert_eq!(format_training_time(25.5), "1 day 1h 30min (25.5 hours)");
        assert_eq!(format_training_time(8760.0 + 1440.0 + 2.0), "1 year 2 months 2h (10202.0 hours)");
        assert_eq!(format_training_time(f64::NAN), MISSING);
    }

    #[test]
    fn test_format_training_time_whole_minutes() {
        assert_eq!(format_training_time(2.1), "2h 6min (2.1 hours)");
        assert_eq!(format_training_time(3.3), "3h 18min (3.3 hours)");
        assert_eq!(format_training_time(1.0), "1h (1.0 hours)");
        assert_eq!(format_training_time(2.0 + 1.0 / 120.0), "2h 1min (2.0 hours)");
    }
}
