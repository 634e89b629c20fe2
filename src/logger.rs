use std::path::Path;
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt};

static GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
static INIT: OnceLock<()> = OnceLock::new();

/// Initializes file logging once per process. Safe to call from every test;
/// later calls are no-ops. `RUST_LOG` overrides `filter` when set.
pub fn init_logging<P: AsRef<Path>>(path: P, filter: &str) {
    INIT.get_or_init(|| {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("open log file");

        // non-blocking writer; the guard must outlive the process
        let (writer, guard) = tracing_appender::non_blocking(file);
        let _ = GUARD.set(guard);

        let env_filter = if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"))
        };

        let subscriber = fmt()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer)
            .finish();

        // a second global subscriber is fine to refuse
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
