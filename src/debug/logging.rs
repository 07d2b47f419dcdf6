//! Console logging for layout passes.

use std::str::FromStr;
use std::sync::{Arc, Mutex, Once, OnceLock};

use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const TRACING_PREFIX: &str = "[flowstack]";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

// ============================================================================
// Global State
// ============================================================================

static TRACING_INSTALLED: Once = Once::new();
static LOG_LEVEL: OnceLock<Arc<Mutex<LevelFilter>>> = OnceLock::new();

fn get_log_level_handle() -> Arc<Mutex<LevelFilter>> {
    LOG_LEVEL
        .get_or_init(|| Arc::new(Mutex::new(DEFAULT_LOG_LEVEL)))
        .clone()
}

/// Update the console log filter level.
///
/// Unparsable input falls back to `info`.
pub fn set_log_level(level: &str) {
    let parsed = LevelFilter::from_str(level).unwrap_or(DEFAULT_LOG_LEVEL);
    if let Ok(mut guard) = get_log_level_handle().lock() {
        *guard = parsed;
    }
}

/// Current console log filter level.
#[must_use]
pub fn log_level() -> LevelFilter {
    get_log_level_handle()
        .lock()
        .map(|guard| *guard)
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

// ============================================================================
// Installation
// ============================================================================

/// Install the console subscriber (idempotent).
///
/// `RUST_LOG` picks what is recorded and the starting print level (default
/// `info`); [`set_log_level`] adjusts the print level at runtime.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let env = EnvFilter::try_from_default_env().ok();
        if let Ok(mut guard) = get_log_level_handle().lock() {
            *guard = initial_level(env.as_ref());
        }
        let filter = env.unwrap_or_else(|| EnvFilter::new("info"));
        let level = get_log_level_handle();
        let runtime_level = filter_fn(move |metadata| {
            let current = level.lock().map(|g| *g).unwrap_or(DEFAULT_LOG_LEVEL);
            level_allows(current, *metadata.level())
        });

        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true)
            .with_filter(runtime_level);

        let result = tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .try_init();

        if result.is_err() {
            eprintln!("{TRACING_PREFIX} a global tracing subscriber is already installed");
        }
    });
}

/// Printing level before any [`set_log_level`] call: the most verbose level
/// `RUST_LOG` enables, or `info` without it.
fn initial_level(env: Option<&EnvFilter>) -> LevelFilter {
    env.and_then(EnvFilter::max_level_hint)
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

const fn level_allows(filter: LevelFilter, level: Level) -> bool {
    match filter {
        LevelFilter::OFF => false,
        LevelFilter::ERROR => matches!(level, Level::ERROR),
        LevelFilter::WARN => matches!(level, Level::ERROR | Level::WARN),
        LevelFilter::INFO => matches!(level, Level::ERROR | Level::WARN | Level::INFO),
        LevelFilter::DEBUG => matches!(
            level,
            Level::ERROR | Level::WARN | Level::INFO | Level::DEBUG
        ),
        LevelFilter::TRACE => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_allows() {
        assert!(level_allows(LevelFilter::INFO, Level::WARN));
        assert!(!level_allows(LevelFilter::INFO, Level::DEBUG));
        assert!(!level_allows(LevelFilter::OFF, Level::ERROR));
        assert!(level_allows(LevelFilter::TRACE, Level::TRACE));
    }

    #[test]
    fn test_rust_log_seeds_level() {
        let debug = EnvFilter::new("debug");
        assert_eq!(initial_level(Some(&debug)), LevelFilter::DEBUG);
        assert!(level_allows(initial_level(Some(&debug)), Level::DEBUG));

        let scoped = EnvFilter::new("warn,flowstack_layout=trace");
        assert_eq!(initial_level(Some(&scoped)), LevelFilter::TRACE);

        assert_eq!(initial_level(None), LevelFilter::INFO);
    }

    #[test]
    fn test_install_and_set_level() {
        install_tracing();
        install_tracing();

        set_log_level("debug");
        assert_eq!(log_level(), LevelFilter::DEBUG);

        set_log_level("not-a-level");
        assert_eq!(log_level(), LevelFilter::INFO);
    }
}
