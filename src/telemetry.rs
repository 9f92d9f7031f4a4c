//! Tracing initialization logic.

use crate::{config::Config, util};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber (stderr fmt layer filtered by `cfg.log_filter`).
pub fn init_tracing(cfg: &Config) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(cfg.verbose)
        .with_level(true);

    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid log filter '{}': {e}", cfg.log_filter);
        EnvFilter::new(Config::default_log_filter(cfg.verbose))
    });

    // try_init so a second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        // Use option_env! for git sha to avoid build errors outside git repo
        git_sha = option_env!("VERGEN_GIT_SHA_SHORT").unwrap_or("unknown"),
        build_ts = env!("VERGEN_BUILD_TIMESTAMP"),
        "formatted-duration starting"
    );

    info!(mode = %cfg.mode,
        ago = cfg.ago,
        watch = cfg.watch,
        interval = %util::format_interval(cfg.interval),
        max_ticks = cfg.max_ticks,
        json = cfg.json,
        verbose = cfg.verbose,
        log_filter = %cfg.log_filter,
        "Configuration loaded");
}
