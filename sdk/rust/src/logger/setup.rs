//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config;
use crate::errors::ConfigurationError;

/// Keeps the non-blocking writers flushing until dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

/// Install the global subscriber described by `conf`.
///
/// `RUST_LOG` takes precedence over the configured level. `crates_to_watch` get the configured
/// level, every other target logs warnings and above.
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    crates_to_watch: Vec<Str>,
) -> Result<TelemetryGuard, ConfigurationError> {
    let mut guards = Vec::new();

    let subscriber = tracing_subscriber::registry().with(
        EnvFilter::builder()
            .with_default_directive(conf.console.level.into_level().into())
            .from_env_lossy(),
    );

    if !conf.console.enabled {
        subscriber.try_init()?;
        return Ok(TelemetryGuard {
            _log_guards: guards,
        });
    }

    let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    guards.push(guard);

    let console_filter = match conf.console.filtering_directive.as_deref() {
        Some(directive) => directive.parse::<filter::Targets>()?,
        None => {
            let level = conf.console.level.into_level();
            crates_to_watch.into_iter().fold(
                filter::Targets::new().with_default(tracing::Level::WARN),
                |targets, krate| targets.with_target(krate.as_ref(), level),
            )
        }
    };

    match conf.console.log_format {
        config::LogFormat::Default => {
            let logging_layer = fmt::layer()
                .with_timer(fmt::time::time())
                .pretty()
                .with_writer(console_writer)
                .with_filter(console_filter);
            subscriber.with(logging_layer).try_init()?;
        }
        config::LogFormat::Json => {
            let logging_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(console_writer)
                .with_filter(console_filter);
            subscriber.with(logging_layer).try_init()?;
        }
    }

    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}
