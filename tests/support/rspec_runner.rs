//! Serial rspec runner for suites that tick a behaviour app.

use rspec::{block::Suite, ConfigurationBuilder, Logger, Runner};
use std::sync::Arc;

/// Runs `suite` on one thread so the guarded app is never contended.
///
/// Behaviour logging is routed to the test output first, so diagnostics
/// raised while a scenario ticks show up next to its failures. A failed
/// expectation exits the test binary with a non-zero status.
pub fn run_serial<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + std::fmt::Debug,
{
    scene_behaviours::init_logging(false);
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(true)
        .build()
        .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
    let reporter = Arc::new(Logger::new(std::io::stdout()));
    Runner::new(config, vec![reporter]).run(suite);
}
