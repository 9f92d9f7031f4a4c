use crate::duration::FormatMode;
use std::time::Duration;

/// Runtime settings resolved from the command line.
#[derive(Clone, Debug)]
pub struct Config {
    pub mode:       FormatMode,
    pub ago:        bool,
    pub watch:      bool,
    pub interval:   Duration,
    pub max_ticks:  u64,
    pub json:       bool,
    pub verbose:    bool,
    pub log_filter: String,
}

impl Config {
    /// Filter used when neither --log-filter nor RUST_LOG is set.
    pub fn default_log_filter(verbose: bool) -> &'static str {
        if verbose {
            "formatted_duration=debug"
        } else {
            "formatted_duration=warn"
        }
    }
}

impl From<&crate::cli::Args> for Config {
    fn from(a: &crate::cli::Args) -> Self {
        Self {
            mode:       a.mode,
            ago:        a.ago,
            watch:      a.watch,
            // A zero interval would make crossbeam's tick channel spin.
            interval:   a.interval.max(Duration::from_millis(1)),
            max_ticks:  a.count,
            json:       a.json,
            verbose:    a.verbose,
            log_filter: a
                .log_filter
                .clone()
                .unwrap_or_else(|| Self::default_log_filter(a.verbose).to_string()),
        }
    }
}
