//! Unit tests for perf module.

use croptool::perf::{
    ScopedTimer, TARGET_FRAME_MS, is_profiling_enabled, measure, measure_and_log,
    set_profiling_enabled,
};

#[test]
fn test_scoped_timer_creation() {
    // High threshold: dropping must not warn or panic
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_per_frame_timer() {
    let _timer = ScopedTimer::per_frame("frame");
    assert!(TARGET_FRAME_MS > 16.0 && TARGET_FRAME_MS < 17.0);
}

#[test]
fn test_measure_returns_value() {
    let (value, elapsed) = measure(|| 21 * 2);
    assert_eq!(value, 42);
    assert!(elapsed >= 0.0);
}

#[test]
fn test_measure_and_log_passes_through() {
    let value = measure_and_log("sum", 1000.0, || (1..=10).sum::<i32>());
    assert_eq!(value, 55);
}

#[test]
fn test_profiling_toggle() {
    let before = is_profiling_enabled();
    set_profiling_enabled(true);
    assert!(is_profiling_enabled());
    set_profiling_enabled(false);
    assert!(!is_profiling_enabled());
    set_profiling_enabled(before);
}

#[test]
fn test_slow_scope_reports_with_profiling_disabled() {
    let before = is_profiling_enabled();
    set_profiling_enabled(false);

    let timer = ScopedTimer::new("slow_op", 0.0);
    std::thread::sleep(std::time::Duration::from_millis(2));
    assert!(timer.is_over_threshold());
    drop(timer);

    set_profiling_enabled(before);
}

#[test]
fn test_fast_scope_stays_under_threshold() {
    let timer = ScopedTimer::new("fast_op", 1000.0);
    assert!(!timer.is_over_threshold());
}
