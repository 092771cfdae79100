use tracing_subscriber::EnvFilter;

// setup_tracing writes json log lines to stderr so that stdout stays reserved for the
// front-desk messages. RUST_LOG overrides the default info level.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .try_init();
}
