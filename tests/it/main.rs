//! Single test binary entry point.
//!
//! All integration tests compile into one binary, which keeps linking to a
//! single pass.
//!
//! Structure:
//! - helpers: Builders and a recording surface shared by every test
//! - integration: Full drag workflows through the editor
//! - unit: Single-component tests against the public API

mod helpers;
mod integration;
mod unit;
