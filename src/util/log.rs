use crate::util::config::LoggingConfig;
use crate::util::logging::standards::events;
use std::io;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::daily;
use tracing_subscriber::fmt::format::{Format, Full};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter::EnvFilter, Layer, Registry};

/// Installs the global subscriber described by `config`.
///
/// Console output goes to stderr so it never mixes with what the binary prints
/// on stdout. The returned guard must be held for as long as file logging
/// should keep flushing.
pub fn log_init_with_config(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let level_filter = parse_level(&config.level);
    let stderr_filter = build_env_filter(level_filter);
    let use_json = config.structured;

    let (file_writer, guard, log_dir) = if config.file.enabled {
        let log_dir = resolve_log_dir(&config.file.directory);
        std::fs::create_dir_all(&log_dir)?;
        let appender = daily(&log_dir, &config.file.prefix);
        let (no_blocking, guard) = tracing_appender::non_blocking(appender);
        (Some(no_blocking), Some(guard), Some(log_dir))
    } else {
        (None, None, None)
    };

    if use_json {
        let stderr_layer = layer()
            .json()
            .with_target(false)
            .with_writer(io::stderr)
            .with_filter(stderr_filter);

        let file_layer = file_writer.map(|writer| {
            layer()
                .json()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(build_env_filter(level_filter))
        });

        Registry::default()
            .with(stderr_layer)
            .with(file_layer)
            .try_init()?;
    } else {
        let stderr_layer = layer()
            .event_format(console_format())
            .with_writer(io::stderr)
            .with_filter(stderr_filter);

        let file_layer = file_writer.map(|writer| {
            layer()
                .event_format(console_format())
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(build_env_filter(level_filter))
        });

        Registry::default()
            .with(stderr_layer)
            .with(file_layer)
            .try_init()?;
    }

    tracing::info!(
        event = events::LOG_INIT,
        level = %level_filter_to_str(level_filter),
        file = config.file.enabled,
        directory = ?log_dir,
        rotation = "daily",
        structured = use_json
    );

    Ok(guard)
}

fn console_format() -> Format<Full, ()> {
    Format::default()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
}

/// `RUST_LOG` wins when set, otherwise the configured level applies.
fn build_env_filter(default_level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
}

fn resolve_log_dir(directory: &str) -> PathBuf {
    let path = PathBuf::from(directory);
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    }
}

fn level_filter_to_str(level: LevelFilter) -> &'static str {
    match level {
        LevelFilter::OFF => "off",
        LevelFilter::ERROR => "error",
        LevelFilter::WARN => "warn",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        LevelFilter::TRACE => "trace",
    }
}
