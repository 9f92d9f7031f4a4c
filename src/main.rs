// Main application entry point.
// Parses arguments, sets up logging, reads the clock once, and prints the
// formatted duration (or keeps re-printing it in --watch mode).

use colored::*;
use formatted_duration::cli::{self, Args};
use formatted_duration::config::Config;
use formatted_duration::report::Report;
use formatted_duration::{
    format_duration, telemetry, Clock, DurationUnits, LiveDuration, SystemClock, TimeSpan,
};
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use std::io::{self, Write};
use std::process::exit;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{debug, info};

/// Exit code for invalid argument combinations clap did not catch.
const EXIT_USAGE: i32 = 2;
/// Exit code for failing to install the SIGINT/SIGTERM handlers.
const EXIT_SIGNAL: i32 = 1;
/// Exit code for failures writing to stdout.
const EXIT_WRITE_ERROR: i32 = 4;

/// What the user asked to format.
enum Subject {
    Units(DurationUnits),
    Span(TimeSpan),
}

impl Subject {
    fn from_args(args: &Args) -> Option<Self> {
        match (args.units, args.from) {
            (Some(units), _) => Some(Subject::Units(units)),
            (None, Some(from)) => Some(Subject::Span(TimeSpan::new(from, args.to))),
            (None, None) => None,
        }
    }
}

fn fail(msg: &str, detail: impl std::fmt::Display, code: i32) -> ! {
    eprintln!("{} {}", msg.on_bright_black().red().bold(), detail);
    exit(code);
}

fn run_once(subject: &Subject, cfg: &Config, now_ms: i64, out: &mut impl Write) -> io::Result<()> {
    let (text, report) = match subject {
        Subject::Units(units) => (
            format_duration(units, cfg.mode),
            cfg.json.then(|| Report::new(units)),
        ),
        Subject::Span(span) => {
            let resolved = span.resolve(now_ms);
            (
                format_duration(&resolved, cfg.mode),
                cfg.json.then(|| Report::new(&resolved)),
            )
        }
    };

    match report {
        Some(report) => report.write_json(out),
        None if cfg.ago => writeln!(out, "{text} ago"),
        None => writeln!(out, "{text}"),
    }
}

fn run_watch(span: TimeSpan, cfg: &Config, out: &mut impl Write) -> io::Result<u64> {
    let stop = Arc::new(AtomicBool::new(false));
    for sig in [SIGINT, SIGTERM] {
        if let Err(e) = signal_hook::flag::register(sig, Arc::clone(&stop)) {
            fail("Error installing signal handler:", e, EXIT_SIGNAL);
        }
    }

    let live = LiveDuration::new(span, cfg.mode, cfg.ago);
    let ticks = crossbeam_channel::tick(cfg.interval);
    info!(open = span.is_open(), "Watching span");
    live.run(&ticks, &SystemClock, out, &stop, cfg.max_ticks)
}

fn handle_write_error(e: io::Error) -> ! {
    // The consumer closing the pipe is a normal way to stop.
    if e.kind() == io::ErrorKind::BrokenPipe {
        exit(0);
    }
    fail("Error writing output:", e, EXIT_WRITE_ERROR);
}

fn main() -> io::Result<()> {
    let args = cli::parse_args();
    let cfg = Config::from(&args);
    telemetry::init_tracing(&cfg);

    let Some(subject) = Subject::from_args(&args) else {
        fail("Error:", "give a duration or --from", EXIT_USAGE);
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cfg.watch {
        let Subject::Span(span) = subject else {
            fail("Error:", "--watch needs --from", EXIT_USAGE);
        };
        match run_watch(span, &cfg, &mut out) {
            Ok(lines) => debug!(lines, "Watch finished"),
            Err(e) => handle_write_error(e),
        }
        return Ok(());
    }

    let now_ms = SystemClock.now_ms();
    debug!(now_ms, "Read clock");
    if let Err(e) = run_once(&subject, &cfg, now_ms, &mut out).and_then(|()| out.flush()) {
        handle_write_error(e);
    }
    Ok(())
}
