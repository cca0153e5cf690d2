//! Logging for the vartree crate
//!
//! Events are coded (see [`codes`]) and carry `key=value` context. They are
//! emitted through the `log` facade, so the embedding application chooses the
//! backend (the CLI installs `env_logger`).

pub mod codes;
pub mod macros;

pub use codes::Code;

/// Target used for every record emitted by this crate
pub const LOG_TARGET: &str = "vartree";

fn render(code: Option<Code>, message: &str, context: &[(&str, &str)]) -> String {
    let mut line = match code {
        Some(code) => format!("[{}] {}", code, message),
        None => message.to_string(),
    };
    for (key, value) in context {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    log::error!(target: LOG_TARGET, "{}", render(Some(code), message, &context));
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    log::info!(target: LOG_TARGET, "{}", render(Some(code), message, &context));
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    log::info!(target: LOG_TARGET, "{}", render(None, message, &context));
}

/// Log debug with context (used by log_debug! macro)
pub fn log_debug_with_context(message: &str, context: Vec<(&str, &str)>) {
    log::debug!(target: LOG_TARGET, "{}", render(None, message, &context));
}

/// Whether debug records from this crate would be emitted
pub fn debug_enabled() -> bool {
    log::log_enabled!(target: LOG_TARGET, log::Level::Debug)
}
