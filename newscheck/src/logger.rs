// newscheck/src/logger.rs
//! Logging bootstrap for the `newscheck` binary.
//!
//! Uses `env_logger` behind the `log` facade. An explicit level overrides
//! `RUST_LOG`; without one, `RUST_LOG` is honored and falls back to `info`.

use log::LevelFilter;

/// Initializes the global logger. Safe to call more than once; later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut b = env_logger::Builder::new();
            b.filter_level(level);
            b
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")),
    };

    builder.format_timestamp_millis().format_target(false);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized; keeping existing configuration.");
    }
}

/// Maps the global CLI flags to a level override.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }
}
