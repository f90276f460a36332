//! Size, duration and summary formatting.

use std::path::Path;
use std::time::Duration;

use console::Term;
use owo_colors::OwoColorize;

/// Human-readable size with binary units.
///
/// ```
/// use distkit_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1536), "1.50 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    match unit {
        0 => format!("{} B", bytes),
        _ => format!("{:.2} {}", size, UNITS[unit]),
    }
}

/// Size in kilobytes, always in that unit, as the bundle log reports it.
pub fn format_kb(kb: f64) -> String {
    format!("{:.2} kb", kb)
}

/// ```
/// use std::time::Duration;
/// use distkit_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(340)), "340ms");
/// assert_eq!(format_duration(Duration::from_millis(4750)), "4.75s");
/// assert_eq!(format_duration(Duration::from_secs(150)), "2m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let ms = duration.as_millis();
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print written artifacts as `path size (duration)` lines.
pub fn print_artifact_summary(title: &str, entries: &[(&Path, u64)], duration: Duration) {
    let width = (Term::stderr().size().1 as usize).min(80);
    let rule = "─".repeat(width);
    let colors = super::colors_enabled();

    if colors {
        eprintln!("\n{}", title.bold().underline());
    } else {
        eprintln!("\n{}", title);
    }
    eprintln!("{}", rule);

    for (path, size) in entries {
        let path = path.display().to_string();
        let size = format_size(*size);
        if colors {
            eprintln!("  {} {} {}", "▸".blue(), path.bright_white().bold(), size.dimmed());
        } else {
            eprintln!("  ▸ {} {}", path, size);
        }
    }

    eprintln!("{}", rule);
    let total: u64 = entries.iter().map(|(_, size)| size).sum();
    eprintln!(
        "  Total: {} in {}",
        format_size(total),
        format_duration(duration)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_sizes() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(48_128), "47.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn kilobytes_keep_their_unit() {
        assert_eq!(format_kb(0.5), "0.50 kb");
        assert_eq!(format_kb(2048.0), "2048.00 kb");
    }

    #[test]
    fn engine_timings() {
        assert_eq!(format_duration(Duration::from_millis(12)), "12ms");
        assert_eq!(format_duration(Duration::from_millis(2250)), "2.25s");
        assert_eq!(format_duration(Duration::from_secs(61)), "1m 1s");
    }
}
