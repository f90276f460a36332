//! Status lines.

use owo_colors::{OwoColorize, Style};

fn status(symbol: &str, symbol_style: Style, message: &str, message_style: Style) {
    if super::colors_enabled() {
        eprintln!("{} {}", symbol.style(symbol_style), message.style(message_style));
    } else {
        eprintln!("{} {}", symbol, message);
    }
}

/// ```no_run
/// distkit_cli::ui::success("npm package written to ./npm/");
/// ```
pub fn success(message: &str) {
    status("✓", Style::new().green().bold(), message, Style::new());
}

pub fn info(message: &str) {
    status("ℹ", Style::new().blue().bold(), message, Style::new());
}

/// Only printed when `RUST_LOG` is set.
pub fn debug(message: &str) {
    if std::env::var_os("RUST_LOG").is_some() {
        status("◆", Style::new().dimmed(), message, Style::new().dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_do_not_panic() {
        success("Success message");
        info("Info message");
        debug("Debug message");
    }
}
