use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGING: OnceCell<()> = OnceCell::new();

/// Used when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "info,tagnote=debug,tagnote_ndef=debug";

/// Install the global subscriber once, later calls do nothing
pub fn init() {
    LOGGING.get_or_init(|| {
        // forward `log` records from dependencies
        let log_tracer = tracing_log::LogTracer::init();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();

        if let Err(error) = log_tracer {
            tracing::debug!("log tracer already installed: {error}");
        }

        if let Err(error) = subscriber {
            tracing::debug!("subscriber already installed: {error}");
        }
    });
}
