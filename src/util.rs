pub fn progress_percent(remaining: u32, total: u32) -> u16 {
    match total {
        positive if positive > 0 => {
            let done = positive.saturating_sub(remaining) as f64;
            ((done / positive as f64) * 100.0).round() as u16
        }
        _ => 0,
    }
}

/// `185` -> `"3m 05s"`
pub fn format_clock(seconds: u32) -> String {
    format!("{}m {:02}s", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(180, 180), 0);
        assert_eq!(progress_percent(90, 180), 50);
        assert_eq!(progress_percent(0, 180), 100);
    }

    #[test]
    fn test_progress_percent_rounds() {
        assert_eq!(progress_percent(2, 3), 33);
        assert_eq!(progress_percent(1, 3), 67);
    }

    #[test]
    fn test_progress_percent_zero_total() {
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(180), "3m 00s");
        assert_eq!(format_clock(185), "3m 05s");
        assert_eq!(format_clock(59), "0m 59s");
        assert_eq!(format_clock(0), "0m 00s");
        assert_eq!(format_clock(3600), "60m 00s");
    }
}
