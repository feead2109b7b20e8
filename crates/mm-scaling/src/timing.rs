use std::time::{Duration, Instant};

/// Runs `f` once and returns its result with the elapsed wall-clock time.
pub fn measure<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Formats a duration in the largest unit that keeps it at or above one.
///
/// Sub-second values use two decimals (`ns`, `µs`, `ms`); seconds use four.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1e-6 {
        format!("{:.2} ns", secs * 1e9)
    } else if secs < 1e-3 {
        format!("{:.2} µs", secs * 1e6)
    } else if secs < 1.0 {
        format!("{:.2} ms", secs * 1e3)
    } else {
        format!("{:.4} s", secs)
    }
}
