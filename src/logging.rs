use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Tracing is opt-in via `RUST_LOG` and always
/// writes to stderr so it never mixes with the menu on stdout.
pub fn init() {
    // Ignore invalid or oversized filters rather than refusing to start.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
