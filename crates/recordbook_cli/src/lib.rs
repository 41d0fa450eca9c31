//! Shared bootstrap for the demo executables.
//!
//! # Responsibility
//! - Resolve per-demo configuration and start file logging.
//!
//! # Invariants
//! - A logging failure is printed and never stops the demo.

use recordbook_core::DemoConfig;

/// Builds the default config for `demo_name` and starts logging.
pub fn bootstrap(demo_name: &str) -> DemoConfig {
    let config = DemoConfig::for_demo(demo_name);
    if let Err(err) = config.init_logging() {
        eprintln!("warning: logging disabled: {err}");
    }
    log::info!(
        "event=demo_start module=cli status=ok demo={} version={}",
        demo_name,
        recordbook_core::core_version()
    );
    config
}
