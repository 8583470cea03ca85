//! Integration tests for croptool.
//!
//! These tests drive a full editor through pointer and keyboard events and
//! check selections, callbacks and surface output end-to-end.

mod replay_tests;
