//! Build metadata injection for command-line binaries.
//!
//! ```no_run
//! fn main() {
//!     releases::hijack(env!("CARGO_PKG_VERSION"), releases::build_info::current());
//!     // application logic
//! }
//! ```
//!
//! This adds two flags to the binary:
//!
//! - `--buildinfo` shows the version, git commit, build date and releaser URL
//! - `--license` shows the license text
//!
//! [`build_info::current()`] holds what the `RELEASES_*` variables carried
//! when this crate was compiled; see [`build_info`]. Only explicitly injected
//! values are embedded, never this crate's own git commit or license, so a
//! program depending on it gets its provenance by setting those variables
//! for its build (`RELEASES_LICENSE_FILE` must be absolute) or by building
//! its own [`Metadata`] and passing that instead.

pub mod build_info;
pub mod hijack;
pub mod util;

// Compiled into build.rs as well.
#[cfg(test)]
mod injection;

pub use build_info::Metadata;
pub use hijack::{hijack, hijack_args, render, scan, Action};
