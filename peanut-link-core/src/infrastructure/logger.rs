//! Logging setup

use std::sync::Once;

use env_logger::Env;

static INIT: Once = Once::new();

/// Install the global logger once. `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) {
    INIT.call_once(|| {
        let result = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
            .format_timestamp_millis()
            .format_target(true)
            .try_init();
        if let Err(e) = result {
            // Another logger was installed by the host application.
            eprintln!("Logger already initialised: {}", e);
        }
    });
}
