// A duration display that keeps itself current.
// Each tick from the timer channel reads the clock once and re-renders the
// span; rendering itself stays a pure function of the span and that instant.

use crate::duration::FormatMode;
use crate::span::{format_span, Clock, TimeSpan};
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// How often the loop wakes up to look at the stop flag while waiting for a tick.
const STOP_CHECK_INTERVAL: Duration = Duration::from_millis(100);

/// A span plus the settings needed to render it repeatedly.
#[derive(Debug, Clone, Copy)]
pub struct LiveDuration {
    pub span: TimeSpan,
    pub mode: FormatMode,
    /// Append `" ago"` to every rendering.
    pub ago: bool,
}

impl LiveDuration {
    pub fn new(span: TimeSpan, mode: FormatMode, ago: bool) -> Self {
        LiveDuration { span, mode, ago }
    }

    /// Renders the span as of `now_ms`.
    pub fn render(&self, now_ms: i64) -> String {
        let text = format_span(&self.span, now_ms, self.mode);
        if self.ago {
            format!("{text} ago")
        } else {
            text
        }
    }

    /// Renders once immediately and again on every tick, one line per change.
    ///
    /// Stops when `stop` is raised, the tick channel disconnects, or
    /// `max_ticks` ticks (if non-zero) have been received. Returns the number
    /// of lines written.
    pub fn run<W: Write>(
        &self,
        ticks: &Receiver<Instant>,
        clock: &impl Clock,
        out: &mut W,
        stop: &AtomicBool,
        max_ticks: u64,
    ) -> io::Result<u64> {
        let mut last = self.render(clock.now_ms());
        writeln!(out, "{last}")?;
        out.flush()?;
        let mut lines = 1u64;
        let mut received = 0u64;

        while !stop.load(Ordering::SeqCst) {
            if max_ticks > 0 && received >= max_ticks {
                debug!(ticks = received, "Tick limit reached");
                break;
            }
            match ticks.recv_timeout(STOP_CHECK_INTERVAL) {
                Ok(_) => {
                    received += 1;
                    let text = self.render(clock.now_ms());
                    trace!(tick = received, %text, "Rendered");
                    if text != last {
                        writeln!(out, "{text}")?;
                        out.flush()?;
                        lines += 1;
                        last = text;
                    }
                }
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("Tick channel disconnected");
                    break;
                }
            }
        }

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::FixedClock;
    use crossbeam_channel::{bounded, unbounded};
    use std::cell::Cell;

    const START: i64 = 1_360_315_800_000; // 2013-02-08T09:30:00Z

    // Clock that advances by a fixed step every time it is read.
    struct SteppingClock {
        now: Cell<i64>,
        step: i64,
    }

    impl Clock for SteppingClock {
        fn now_ms(&self) -> i64 {
            let now = self.now.get();
            self.now.set(now + self.step);
            now
        }
    }

    fn feed(n: usize) -> Receiver<Instant> {
        let (tx, rx) = unbounded();
        for _ in 0..n {
            tx.send(Instant::now()).unwrap();
        }
        rx
    }

    #[test]
    fn render_appends_ago() {
        let live = LiveDuration::new(TimeSpan::since(START), FormatMode::Narrow, true);
        assert_eq!(live.render(START + 59_000), "< 1m ago");
        assert_eq!(live.render(START + 2 * 3_600_000), "2h ago");
    }

    #[test]
    fn render_without_ago() {
        let live = LiveDuration::new(TimeSpan::since(START), FormatMode::Long, false);
        assert_eq!(live.render(START + 60_000), "1 minute");
    }

    #[test]
    fn writes_a_line_per_change() {
        let live = LiveDuration::new(TimeSpan::since(START), FormatMode::Narrow, false);
        let clock = SteppingClock {
            now: Cell::new(START + 60_000),
            step: 60_000,
        };
        let ticks = feed(3);
        let stop = AtomicBool::new(false);
        let mut out = Vec::new();

        let lines = live.run(&ticks, &clock, &mut out, &stop, 3).unwrap();

        assert_eq!(lines, 4);
        assert_eq!(String::from_utf8(out).unwrap(), "1m\n2m\n3m\n4m\n");
    }

    #[test]
    fn skips_unchanged_renderings() {
        let live = LiveDuration::new(TimeSpan::since(START), FormatMode::Narrow, true);
        let ticks = feed(5);
        let stop = AtomicBool::new(false);
        let mut out = Vec::new();

        let lines = live
            .run(&ticks, &FixedClock(START + 600_000), &mut out, &stop, 5)
            .unwrap();

        assert_eq!(lines, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "10m ago\n");
    }

    #[test]
    fn stops_when_channel_disconnects() {
        let live = LiveDuration::new(TimeSpan::since(START), FormatMode::Narrow, false);
        let ticks = {
            let (tx, rx) = bounded(2);
            tx.send(Instant::now()).unwrap();
            rx
        };
        let clock = SteppingClock {
            now: Cell::new(START),
            step: 3_600_000,
        };
        let stop = AtomicBool::new(false);
        let mut out = Vec::new();

        let lines = live.run(&ticks, &clock, &mut out, &stop, 0).unwrap();

        assert_eq!(lines, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "< 1m\n1h\n");
    }

    #[test]
    fn stop_flag_ends_loop_before_ticks() {
        let live = LiveDuration::new(TimeSpan::since(START), FormatMode::Narrow, false);
        let (_tx, ticks) = unbounded::<Instant>();
        let stop = AtomicBool::new(true);
        let mut out = Vec::new();

        let lines = live
            .run(&ticks, &FixedClock(START), &mut out, &stop, 0)
            .unwrap();

        assert_eq!(lines, 1);
    }

    #[test]
    fn closed_span_never_changes() {
        let span = TimeSpan::new(START, Some(START + 90 * 60_000));
        let live = LiveDuration::new(span, FormatMode::Long, false);
        let clock = SteppingClock {
            now: Cell::new(START),
            step: 3_600_000,
        };
        let ticks = feed(4);
        let stop = AtomicBool::new(false);
        let mut out = Vec::new();

        live.run(&ticks, &clock, &mut out, &stop, 4).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1 hour 30 minutes\n");
    }
}
