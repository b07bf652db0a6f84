//! Logging with colored module prefixes.
//!
//! Output goes to stderr so stdout stays clean for JSON reports.
//!
//! # Example
//!
//! ```ignore
//! log!("routes"; "resolved {} pages", count);
//! debug!("transform"; "{} -> {}", before, after);
//! ```

use owo_colors::{OwoColorize, Stream};
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
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

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let styled = |apply: fn(&String) -> String| {
        prefix
            .if_supports_color(Stream::Stderr, |p| apply(p))
            .to_string()
    };
    match module_lower {
        "error" => styled(|p| p.bright_red().bold().to_string()),
        "warning" => styled(|p| p.bright_magenta().bold().to_string()),
        "routes" => styled(|p| p.bright_blue().bold().to_string()),
        "transform" | "permalink" => styled(|p| p.bright_green().bold().to_string()),
        _ => styled(|p| p.bright_yellow().bold().to_string()),
    }
}
