// textent/src/logger.rs
//! env_logger initialization for the binary.

/// Initializes the global logger. An explicit `level` overrides whatever
/// `RUST_LOG` asks for; `None` keeps the environment configuration.
/// Repeated calls are ignored, which keeps test processes happy.
pub fn init_logger(level: Option<log::LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
