//! Timing instrumentation for the interaction hot paths.
//!
//! Pointer-move events can arrive at display rate or faster, and every one
//! of them runs a selection update. The macros here time those paths when
//! the `profiling` feature is enabled and compile to nothing otherwise.
//!
//! ```ignore
//! use croptool::profile_scope;
//!
//! fn pointer_move() {
//!     profile_scope!("pointer_move");
//!     // ... update selection ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

pub use crate::constants::TARGET_FRAME_MS;

/// Threshold used by `profile_scope!` without an explicit value
const PROFILING_THRESHOLD_MS: f64 = 1.0;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that reports its duration on drop when over threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer budgeted to one display frame.
    pub fn per_frame(name: &'static str) -> Self {
        Self::new(name, TARGET_FRAME_MS)
    }

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, PROFILING_THRESHOLD_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the scope has already run past its threshold.
    pub fn is_over_threshold(&self) -> bool {
        self.elapsed_ms() > self.threshold_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        // Runtime toggle gates the profiling trace only
        #[cfg(feature = "profiling")]
        if is_profiling_enabled() {
            trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        }

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

// ============================================================================
// Timing Utilities
// ============================================================================

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}

/// Measure execution time and warn if it exceeds the threshold.
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, threshold_ms: f64, f: F) -> T {
    let (result, elapsed_ms) = measure(f);
    if elapsed_ms > threshold_ms {
        warn!(
            operation = name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", threshold_ms),
            "Slow operation"
        );
    }
    result
}
