//! Human-readable size and duration formatting

use std::time::Duration;

/// Format a byte count with 1024-based units, e.g. `1.5 GB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: &[char] = &['K', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", bytes as f64 / div as f64, PREFIXES[exp])
}

/// Format a duration as `H:MM:SS`; zero is "Unknown".
pub fn format_duration(d: Duration) -> String {
    if d.is_zero() {
        return "Unknown".to_string();
    }
    let secs = d.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
