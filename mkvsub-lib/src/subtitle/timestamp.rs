//! ASS timestamp rendering (`H:MM:SS.CC`)

const NS_PER_CENTISECOND: u64 = 10_000_000;

/// Format a nanosecond offset as an ASS timestamp.
///
/// Centiseconds are rounded half-up in integer arithmetic; hours are unpadded
/// and unbounded.
pub fn format_timestamp(ns: u64) -> String {
    // Split before biasing so values near u64::MAX cannot overflow
    let total_cs = ns / NS_PER_CENTISECOND + u64::from(ns % NS_PER_CENTISECOND >= 5_000_000);

    let cs = total_cs % 100;
    let total_secs = total_cs / 100;
    let secs = total_secs % 60;
    let mins = (total_secs / 60) % 60;
    let hours = total_secs / 3600;

    format!("{}:{:02}:{:02}.{:02}", hours, mins, secs, cs)
}
