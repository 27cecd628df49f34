/// Test initialization that wires up logging once per integration test
/// binary. Tests that omit the support module run silent.
#[ctor::ctor]
fn init_test_logging() {
    scorekeeper_test_support::logging::init();
}
