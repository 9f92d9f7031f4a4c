use crate::duration::FormatMode;
use crate::input::DurationUnits;
use crate::util::parse_timestamp_ms;
use clap::{ArgGroup, Parser};
use std::time::Duration;

/// Formats a duration or time span as a compact (1d 2h 5m) or worded
/// (1 day 2 hours 5 minutes) string.
/// Give either a duration in unit form ("6w", "1d 2h 5m") or a span start with --from.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["units", "from"])))]
pub struct Args {
    /// Duration as whitespace-separated <integer><unit> tokens.
    /// Units: y (365 days), w, d, h, m, s, ms. Example: "2w 6d 12m".
    #[arg(value_parser = parse_units, allow_hyphen_values = true)]
    pub units: Option<DurationUnits>,

    /// Span start: milliseconds since the Unix epoch or an RFC 3339 timestamp.
    #[arg(long, value_parser = parse_timestamp_ms, allow_hyphen_values = true, value_name = "TS")]
    pub from: Option<i64>,

    /// Span end, same formats as --from. Omitted or 0 means now.
    #[arg(
        long,
        value_parser = parse_timestamp_ms,
        requires = "from",
        conflicts_with = "units",
        value_name = "TS"
    )]
    pub to: Option<i64>,

    /// Output vocabulary.
    #[arg(short, long, value_enum, default_value_t = FormatMode::Narrow)]
    pub mode: FormatMode,

    /// Append " ago" to the output.
    #[arg(long, requires = "from", conflicts_with_all = ["units", "json"], action = clap::ArgAction::SetTrue)]
    pub ago: bool,

    /// Keep re-rendering the span on every tick until interrupted.
    #[arg(long, requires = "from", conflicts_with_all = ["units", "json"], action = clap::ArgAction::SetTrue)]
    pub watch: bool,

    /// Tick interval for --watch (e.g., "1m", "30s", "500ms").
    #[arg(long, default_value = "1m", value_parser = humantime::parse_duration)]
    pub interval: Duration,

    /// Stop --watch after N ticks (0 = run until interrupted).
    #[arg(long, default_value = "0", value_name = "N")]
    pub count: u64,

    /// Print a JSON object with both renderings and the unit breakdown.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    /// Enable verbose logging (shows log targets, lowers default level to debug).
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Log filter directive (tracing EnvFilter syntax).
    #[arg(long, env = "RUST_LOG", value_name = "FILTER")]
    pub log_filter: Option<String>,
}

fn parse_units(s: &str) -> Result<DurationUnits, String> {
    s.parse::<DurationUnits>().map_err(|e| e.to_string())
}

/// Parses command line arguments using clap.
pub fn parse_args() -> Args {
    Args::parse()
}
