use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

/// Installs the global `fmt` subscriber. Verbosity comes from `RUST_LOG`.
pub fn init() {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
}
