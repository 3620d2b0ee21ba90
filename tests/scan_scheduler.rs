mod tests {
    use embassy_time::{Duration, Instant};
    use tunable_white::{DigitPosition, ScanScheduler, SegmentSink, SharedDisplay, Suppress};

    #[derive(Default)]
    struct CountingSegments {
        selected: Vec<DigitPosition>,
        last_pattern: u8,
    }

    impl SegmentSink for CountingSegments {
        fn deselect_all(&mut self) {}

        fn write_segments(&mut self, pattern: u8) {
            self.last_pattern = pattern;
        }

        fn select(&mut self, position: DigitPosition) {
            self.selected.push(position);
        }
    }

    #[test]
    fn test_tick_paces_scans() {
        let display = SharedDisplay::new();
        display.set_value(7, Suppress::Leading);
        let mut scheduler = ScanScheduler::new(&display, CountingSegments::default());

        let first = scheduler.tick(Instant::from_millis(0));
        assert_eq!(first.next_deadline, Instant::from_millis(3));
        assert_eq!(first.sleep_duration, Duration::from_millis(3));

        let second = scheduler.tick(Instant::from_millis(3));
        assert_eq!(second.next_deadline, Instant::from_millis(6));
        assert_eq!(scheduler.sink().last_pattern, 0x07);
        assert_eq!(
            scheduler.sink().selected,
            vec![DigitPosition::Left, DigitPosition::Right]
        );
    }

    #[test]
    fn test_late_tick_returns_zero_sleep() {
        let display = SharedDisplay::new();
        let mut scheduler = ScanScheduler::with_period(
            &display,
            CountingSegments::default(),
            Duration::from_millis(3),
        );
        scheduler.tick(Instant::from_millis(0));
        let late = scheduler.tick(Instant::from_millis(5));
        assert_eq!(late.next_deadline, Instant::from_millis(6));
        assert_eq!(late.sleep_duration, Duration::from_millis(1));

        let later = scheduler.tick(Instant::from_millis(9));
        assert_eq!(later.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_stall_resets_schedule() {
        let display = SharedDisplay::new();
        let mut scheduler = ScanScheduler::new(&display, CountingSegments::default());
        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(100));
        assert_eq!(result.next_deadline, Instant::from_millis(103));
        assert_eq!(scheduler.period(), Duration::from_millis(3));
    }
}
