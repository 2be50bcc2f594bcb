//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "ESTATE_SCAN_LOG";

static INIT: Once = Once::new();

/// Default directive for a `-v` count.
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "estate_scan=warn",
        1 => "estate_scan=info",
        _ => "estate_scan=debug",
    }
}

/// Installs a stderr fmt subscriber.
///
/// `ESTATE_SCAN_LOG` wins when set and valid, e.g.
/// `ESTATE_SCAN_LOG=estate_scan::filter=trace`. Otherwise the level comes
/// from `verbosity`. Only the first call has any effect.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "estate_scan=warn");
        assert_eq!(default_directive(1), "estate_scan=info");
        assert_eq!(default_directive(5), "estate_scan=debug");
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing(0);
        init_tracing(2);
        tracing::debug!("still fine after double init");
    }
}
