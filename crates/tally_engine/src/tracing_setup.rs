use std::sync::Once;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install a `RUST_LOG`-driven subscriber for traversal diagnostics.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set:
///
/// - `RUST_LOG=tally_engine=debug` logs one span per `traverse`, closed with
///   its duration, tagged with the operation name and node count.
/// - `RUST_LOG=tally_ir=trace` adds one event per dispatched node.
/// - `RUST_LOG=tally_availability=info` shows availability status lines.
///
/// If the host already installed a global subscriber, that one is kept.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
