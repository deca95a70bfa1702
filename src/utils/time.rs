//! Time formatting utilities

use std::time::Duration;

/// Format seconds for the engine command line: millisecond precision,
/// trailing zeros dropped (`10`, `15.5`, `60.05`)
pub fn format_seconds(seconds: f64) -> String {
    let fixed = format!("{:.3}", seconds);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format an elapsed wall-clock time for display
pub fn format_elapsed(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let milliseconds = duration.subsec_millis();

    if hours > 0 {
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, milliseconds)
    } else {
        format!("{:02}:{:02}.{:03}", minutes, seconds, milliseconds)
    }
}
