//! Logger bootstrap shared by the binary and integration tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Picks the default level for a run; `RUST_LOG` still overrides it.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger.
///
/// Deactivations are reported at debug level, so pass `verbose` to see them.
/// Calling this more than once is harmless.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    let mut builder = Builder::from_env(env);
    builder.format_target(false);

    // Fails only when a logger is already installed.
    if builder.try_init().is_err() {
        log::trace!("logger already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, LevelFilter::Debug)]
    #[case(false, LevelFilter::Info)]
    fn verbosity_selects_level(#[case] verbose: bool, #[case] expected: LevelFilter) {
        assert_eq!(default_level(verbose), expected);
    }

    #[rstest]
    fn repeated_init_does_not_panic() {
        init(false);
        init(true);
    }
}
