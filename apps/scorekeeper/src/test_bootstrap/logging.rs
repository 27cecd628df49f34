//! Unit-test logging initialization.
//!
//! Delegates to the shared test-support implementation so unit and
//! integration tests log identically.

pub fn init() {
    scorekeeper_test_support::logging::init();
}
