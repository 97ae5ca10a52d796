use env_logger::{Builder, Env};

/// Diagnostics go to stderr so stdout carries nothing but the report.
/// `RUST_LOG` raises the level, e.g. `RUST_LOG=debug` shows every query.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
