/// Origin recorded on images whose source is unknown
pub const UNDEFINED_ORIGIN: &str = "UNDEFINED";
/// Log level used when the configuration does not set one
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Crates whose records follow the configured level when `RUST_LOG` is unset
pub const LOGGED_CRATES: &[&str] = &["als_core", "als"];
