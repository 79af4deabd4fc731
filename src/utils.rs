use std::io::{IsTerminal, Read};

use crate::error::DiffMergeError;

/// Check if debug logging is enabled via environment variable
///
/// This is checked once to avoid repeated environment variable lookups.
static DEBUG_ENABLED: std::sync::OnceLock<bool> = std::sync::OnceLock::new();
static DEBUG_PERFORMANCE_LEVEL: std::sync::OnceLock<u8> = std::sync::OnceLock::new();
static IS_TERMINAL: std::sync::OnceLock<bool> = std::sync::OnceLock::new();

fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| {
        (cfg!(debug_assertions)
            || std::env::var("DIFFMERGE_DEBUG").unwrap_or_default() == "1"
            || std::env::var("DIFFMERGE_DEBUG_PERFORMANCE").unwrap_or_default() != "")
            && std::env::var("DIFFMERGE_DEBUG").unwrap_or_default() != "0"
    })
}

fn is_debug_performance_enabled() -> bool {
    debug_performance_level() >= 1
}

fn debug_performance_level() -> u8 {
    *DEBUG_PERFORMANCE_LEVEL.get_or_init(|| {
        std::env::var("DIFFMERGE_DEBUG_PERFORMANCE")
            .unwrap_or_default()
            .parse::<u8>()
            .unwrap_or(0)
    })
}

pub fn debug_performance_log(msg: &str) {
    if is_debug_performance_enabled() {
        eprintln!("\x1b[1;33m[diffmerge (perf)]\x1b[0m {}", msg);
    }
}

pub fn debug_performance_log_structured(json: serde_json::Value) {
    if debug_performance_level() >= 2 {
        eprintln!("\x1b[1;33m[diffmerge (perf-json)]\x1b[0m {}", json);
    }
}

/// Debug logging utility function
///
/// Prints debug messages with a colored prefix when debug assertions are enabled or when
/// the `DIFFMERGE_DEBUG` environment variable is set to "1".
pub fn debug_log(msg: &str) {
    if is_debug_enabled() {
        eprintln!("\x1b[1;33m[diffmerge]\x1b[0m {}", msg);
    }
}

pub fn is_interactive_terminal() -> bool {
    *IS_TERMINAL.get_or_init(|| std::io::stdin().is_terminal())
}

/// Read a document argument from the command line. `-` reads stdin.
///
/// Rejects inputs larger than `max_bytes` before any diffing happens, since the
/// engine itself has no latency bound.
pub fn read_document(path: &str, max_bytes: Option<usize>) -> Result<String, DiffMergeError> {
    let contents = if path == "-" {
        if is_interactive_terminal() {
            return Err(DiffMergeError::Generic(
                "refusing to read a document from an interactive terminal".to_string(),
            ));
        }
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    if let Some(limit) = max_bytes
        && contents.len() > limit
    {
        return Err(DiffMergeError::Generic(format!(
            "{} is {} bytes, over the configured limit of {} bytes",
            path,
            contents.len(),
            limit
        )));
    }

    Ok(contents)
}
