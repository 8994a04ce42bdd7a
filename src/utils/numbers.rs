/// Format an hour amount the way the report prints it: whole numbers without a
/// decimal part, everything else in shortest form.
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 && hours.abs() < 1e15 {
        format!("{}", hours as i64)
    } else {
        format!("{hours}")
    }
}

/// Bar annotation value, truncated towards zero
pub fn format_truncated(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(120.0), "120");
        assert_eq!(format_hours(0.0), "0");
        assert_eq!(format_hours(7.5), "7.5");
    }

    #[test]
    fn test_format_truncated() {
        assert_eq!(format_truncated(45.9), "45");
        assert_eq!(format_truncated(3.0), "3");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(15.3), "15.3%");
        assert_eq!(format_percent(22.058823), "22.1%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
