//! This module provides the logging hooks for the bitweave engine.
//!
//! The engine itself only talks to the `log` facade. `enable_verbose_logging`
//! installs an `env_logger` backend for applications (and the Python binding)
//! that do not bring their own, and `log_metric!` formats structured
//! key/value events on top of `log::debug!`.

use log::LevelFilter;
use std::fs::OpenOptions;
use std::sync::Once;

use crate::error::BitweaveError;

/// Logs a structured key-value metric line at `debug` level.
///
/// # Example
/// ```
/// use bitweave::log_metric;
/// let words = 8;
/// log_metric!("event" = "grow", "words" = &words);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if $crate::__log::log_enabled!($crate::__log::Level::Debug) {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::__log::debug!("BITWEAVE_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend once per process.
///
/// Other crates log at `Info`; bitweave's own records, metrics included, are
/// kept down to `Debug`.
/// With `log_file` set, records are appended to that file instead of stderr.
/// Later calls are no-ops.
pub fn enable_verbose_logging(log_file: Option<&str>) -> Result<(), BitweaveError> {
    let target = match log_file {
        Some(filename) => Some(OpenOptions::new().append(true).create(true).open(filename)?),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);
        builder.filter_module("bitweave", LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_verbose_logging_is_idempotent() {
        assert!(enable_verbose_logging(None).is_ok());
        assert!(enable_verbose_logging(None).is_ok());
        log_metric!("event" = "test", "value" = 1);
    }

    #[test]
    fn test_metrics_are_enabled_after_install() {
        enable_verbose_logging(None).unwrap();
        let config = crate::BitweaveConfig {
            log_growth: true,
            ..Default::default()
        };
        let mut bv = crate::BitVector::with_config(&config);
        bv.append_u64(u64::MAX, 64).unwrap();
        bv.append_u64(u64::MAX, 64).unwrap();
        assert!(log::log_enabled!(log::Level::Debug));
    }

    #[test]
    fn test_unopenable_log_file_is_io_error() {
        let result = enable_verbose_logging(Some("/nonexistent-dir/bitweave/log.txt"));
        assert!(matches!(result, Err(BitweaveError::Io(_))));
    }
}
