//! Property-based tests for the telemetry window

use deskterm::telemetry::{TelemetryWindow, DEFAULT_WINDOW_CAPACITY};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_window_never_exceeds_capacity(
        samples in prop::collection::vec(0.0f64..10_000.0, 0..50),
    ) {
        let mut window = TelemetryWindow::new(DEFAULT_WINDOW_CAPACITY);
        for sample in &samples {
            window.push(*sample);
            prop_assert!(window.len() <= DEFAULT_WINDOW_CAPACITY);
        }
    }

    #[test]
    fn test_window_keeps_last_n_oldest_first(
        samples in prop::collection::vec(0.0f64..10_000.0, 11..40),
    ) {
        let mut window = TelemetryWindow::new(DEFAULT_WINDOW_CAPACITY);
        for sample in &samples {
            window.push(*sample);
        }
        let tail = &samples[samples.len() - DEFAULT_WINDOW_CAPACITY..];
        prop_assert_eq!(window.snapshot(), tail.to_vec());
        prop_assert_eq!(window.latest(), *samples.last().unwrap());
    }

    #[test]
    fn test_numeric_readings_are_recorded(value in 0.0f64..1_000_000.0) {
        let mut window = TelemetryWindow::new(DEFAULT_WINDOW_CAPACITY);
        prop_assert!(window.record(&value.to_string()));
        prop_assert_eq!(window.latest(), value);
    }

    #[test]
    fn test_non_numeric_readings_never_advance_the_window(
        reading in "[a-zA-Z #?]{1,12}",
    ) {
        let mut window = TelemetryWindow::new(DEFAULT_WINDOW_CAPACITY);
        window.push(42.0);

        prop_assert!(!window.record(&reading));
        prop_assert_eq!(window.len(), 1);
        prop_assert_eq!(window.latest(), 42.0);
    }

    #[test]
    fn test_negative_readings_are_discarded(value in -1_000_000.0f64..-0.0001) {
        let mut window = TelemetryWindow::new(DEFAULT_WINDOW_CAPACITY);
        prop_assert!(!window.record(&value.to_string()));
        prop_assert!(window.is_empty());
    }

    #[test]
    fn test_custom_capacities_hold(capacity in 1usize..20, extra in 0usize..30) {
        let mut window = TelemetryWindow::new(capacity);
        for i in 0..(capacity + extra) {
            window.push(i as f64);
        }
        prop_assert_eq!(window.len(), capacity);
        prop_assert_eq!(window.capacity(), capacity);
    }
}
