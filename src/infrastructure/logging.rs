use std::io;

use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

use crate::{config::AppConfig, infrastructure::directories::ResolvedPaths};

pub const LOG_FILE_PREFIX: &str = "mail-labeler.log";

/// Dependencies that are chatty at `info`: sqlx logs every statement and the
/// HTTP stack logs connection pooling.
const QUIET_DEPENDENCIES: &[&str] = &["sqlx=warn", "hyper=warn", "hyper_util=warn", "reqwest=warn"];

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// `RUST_LOG` wins when set; otherwise `level` applies to this crate and the
/// noisy dependencies are held at `warn`.
pub fn build_filter(level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let base = EnvFilter::try_new(level).unwrap_or_else(|_| {
        eprintln!("invalid LOG_LEVEL {level:?}; using info");
        EnvFilter::new("info")
    });
    QUIET_DEPENDENCIES
        .iter()
        .filter_map(|directive| directive.parse::<Directive>().ok())
        .fold(base, EnvFilter::add_directive)
}

/// Installs the global subscriber once. Later calls are no-ops.
///
/// The console layer writes to stderr because `classify` prints decisions on
/// stdout. The rolling file keeps one file per day under `logs_dir`.
pub fn init_tracing(config: &AppConfig, paths: &ResolvedPaths) -> Result<()> {
    if FILE_GUARD.get().is_some() {
        return Ok(());
    }

    let (file_writer, guard) =
        tracing_appender::non_blocking(rolling::daily(&paths.logs_dir, LOG_FILE_PREFIX));
    if FILE_GUARD.set(guard).is_err() {
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(build_filter(&config.logging.level))
        .with(fmt::layer().compact().with_writer(io::stderr))
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()?;

    tracing::info!(
        target: "lifecycle",
        logs = %paths.logs_dir.display(),
        provider = %config.ai.provider,
        version = env!("CARGO_PKG_VERSION"),
        "logging ready"
    );
    Ok(())
}
