use crate::error::PrimerResult;
pub use ::tracing::{debug, info_span, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/* 📖 # Why does the fmt layer write to stderr?
Lesson output is the program's stdout and must stay byte-exact. Diagnostics
therefore go to stderr, and the filter only applies to the fmt layer so that
the ErrorLayer still records every span for error span traces.
*/

pub fn init_tracing() -> PrimerResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| crate::err!("Failed to initialize tracing: {}", e))
}
