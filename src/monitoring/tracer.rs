/*!
 * Structured Tracing
 * Subscriber setup for engine and front-end events using the tracing crate
 *
 * Features:
 * - Env-filtered levels (RUST_LOG)
 * - JSON-formatted logs for structured parsing
 * - Per-simulation spans so concurrent simulations stay distinguishable
 */

use crate::core::limits::DEFAULT_LOG_FILTER;
use crate::core::types::SimulationId;
use tracing::{info, span, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Output goes to stderr so it never interleaves with the menu on stdout.
/// Returns false if a global subscriber was already installed.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
pub fn init_tracing(json: bool) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if json {
        // JSON output for parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
            .is_ok()
    } else {
        // Human-readable output
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        info!(json, "Structured tracing initialized");
    }
    installed
}

/// Span covering one interactive session over a simulation
pub fn session_span(simulation: SimulationId) -> Span {
    span!(Level::INFO, "session", simulation = %simulation)
}
