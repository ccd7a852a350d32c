use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};

pub fn format_datetime(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Seconds with four decimals, the shape used in debug timing lines.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.4}", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_keeps_four_decimals() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.5000");
        assert_eq!(format_elapsed(Duration::ZERO), "0.0000");
    }
}
