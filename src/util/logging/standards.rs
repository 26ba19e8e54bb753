//! Centralised logging metadata (event names, shared keys, etc.).

/// Canonical event names used across the crate.
pub mod events {
    /// Startup flag interception.
    pub const HIJACK_SCAN: &str = "hijack.scan";
    pub const HIJACK_MATCH: &str = "hijack.match";

    /// Stdout could not be written.
    pub const OUTPUT_WRITE_FAILED: &str = "output.write_failed";

    /// Reference binary lifecycle.
    pub const LOG_INIT: &str = "log.init";
    pub const CONFIG_LOAD: &str = "config.load";
    pub const CONFIG_ENV_OVERRIDE: &str = "config.env_override";
    pub const APP_START: &str = "app.start";
}
