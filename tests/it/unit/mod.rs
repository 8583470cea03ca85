//! Unit tests for croptool.

mod perf_tests;
mod snapshot_tests;
