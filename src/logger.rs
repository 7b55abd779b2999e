use tracing::Level;

/// Installs a stderr `fmt` subscriber at INFO. Calling it twice is harmless.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
