//! Scorekeeper test support utilities
//!
//! This crate provides utilities for testing the scorekeeper client:
//! unified logging initialization and a reference bonus-aware scorer
//! that stands in for the remote scoring service.

pub mod logging;
pub mod scoring;
