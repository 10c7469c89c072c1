//! Logging utilities with colored module prefixes.
//!
//! Output format: `[module] message`. Error-ish modules get a red prefix,
//! everything else yellow (like the rest of the build output).
//!
//! ```ignore
//! log!("index"; "generated {} pages", count);
//! log!("error"; "{err:#}");
//! ```

use colored::{ColoredString, Colorize};
use std::io::{Write, stdout};

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "error" => prefix.bright_red().bold(),
        "init" => prefix.bright_green().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_contains_module_name() {
        colored::control::set_override(false);
        let prefix = colorize_prefix("index");
        assert_eq!(prefix.to_string(), "[index]");
    }

    #[test]
    fn test_prefix_case_insensitive_coloring() {
        colored::control::set_override(true);
        let upper = colorize_prefix("ERROR");
        let lower = colorize_prefix("error");
        assert_eq!(upper.fgcolor(), lower.fgcolor());
    }
}
