//! This module provides the logging hooks for the codec and its command shell.
//!
//! The kernels report through the `log` facade only; a binary decides where the
//! records go by calling `init_logging` once at startup.

use std::sync::Once;

use log::LevelFilter;

static INIT_LOGGER: Once = Once::new();

/// Logs a structured key-value metric line at debug level, only in debug builds.
///
/// # Example
/// ```
/// use base32k::log_metric;
/// let symbols = 8;
/// log_metric!("event"="encode", "symbols"=&symbols);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::__log::debug!("BASE32K_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

/// Installs the `env_logger` backend at `level`; `RUST_LOG` still overrides it.
/// Records go to stderr so stdout carries nothing but codec output.
pub fn init_logging(level: LevelFilter) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);
        builder.parse_default_env();

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });
        builder.target(env_logger::Target::Stderr);

        let _ = builder.try_init();
    });
}
