//! Display scan timing.
//!
//! Portable scan pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks, or for
//! calling [`ScanScheduler::tick`] from a periodic timer interrupt.

use embassy_time::{Duration, Instant};

use crate::SegmentSink;
use crate::display::{DisplayScanner, SharedDisplay};

/// Default digit scan period.
pub const DEFAULT_SCAN_PERIOD: Duration = Duration::from_millis(3);

/// Result of a scan tick.
#[derive(Debug, Clone, Copy)]
pub struct ScanResult {
    /// The deadline for the next digit.
    pub next_deadline: Instant,
    /// How long to wait until the next digit (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives the digit scanner at a fixed period.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = ScanScheduler::new(&DISPLAY, segments);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct ScanScheduler<'a, S: SegmentSink> {
    display: &'a SharedDisplay,
    sink: S,
    scanner: DisplayScanner,
    next_scan: Instant,
    period: Duration,
}

impl<'a, S: SegmentSink> ScanScheduler<'a, S> {
    /// Create a scheduler using [`DEFAULT_SCAN_PERIOD`].
    pub fn new(display: &'a SharedDisplay, sink: S) -> Self {
        Self::with_period(display, sink, DEFAULT_SCAN_PERIOD)
    }

    pub fn with_period(display: &'a SharedDisplay, sink: S, period: Duration) -> Self {
        Self {
            display,
            sink,
            scanner: DisplayScanner::new(),
            next_scan: Instant::from_millis(0),
            period,
        }
    }

    /// Light the next digit and return timing information.
    ///
    /// After a stall of more than two periods the schedule restarts from
    /// `now` rather than scanning in a burst.
    pub fn tick(&mut self, now: Instant) -> ScanResult {
        let max_drift = self.period.as_ticks().saturating_mul(2);
        if now.as_ticks() > self.next_scan.as_ticks().saturating_add(max_drift) {
            self.next_scan = now;
        }

        self.scanner.refresh(self.display, &mut self.sink);

        self.next_scan += self.period;

        let sleep_duration = if self.next_scan > now {
            self.next_scan - now
        } else {
            Duration::from_ticks(0)
        };

        ScanResult {
            next_deadline: self.next_scan,
            sleep_duration,
        }
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    pub const fn scanner(&self) -> &DisplayScanner {
        &self.scanner
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
