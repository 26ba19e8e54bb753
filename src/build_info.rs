//! Build provenance embedded into the binary and the record that carries it.
//!
//! `build.rs` embeds whatever the `RELEASES_GIT_COMMIT`, `RELEASES_BUILD_DATE`,
//! `RELEASES_URL` and `RELEASES_LICENSE_FILE` (absolute path) variables held
//! when this package was compiled. Nothing else is consulted, so a program
//! depending on this crate only sees its own provenance in [`current()`] when
//! its build sets those variables; otherwise the commit, URL and license are
//! empty and the date is the compile time. Programs that know their metadata
//! another way should construct a [`Metadata`] themselves.
//!
//! Values that were never injected read back as empty strings, which print
//! exactly like genuinely empty ones.

use std::io::{self, StdoutLock, Write};
use std::sync::LazyLock;

use crate::util::logging::standards::events;

/// Build-time metadata exposed at runtime.
pub const BUILD_COMMIT: &str = match option_env!("RELEASES_BUILD_COMMIT") {
    Some(v) => v,
    None => "",
};
pub const BUILD_DATE: &str = match option_env!("RELEASES_BUILD_DATE") {
    Some(v) => v,
    None => "",
};
pub const BUILD_URL: &str = match option_env!("RELEASES_BUILD_URL") {
    Some(v) => v,
    None => "",
};
pub const LICENSE_TEXT: &str = include_str!(concat!(env!("OUT_DIR"), "/license.txt"));

static CURRENT: LazyLock<Metadata> = LazyLock::new(Metadata::from_build_env);

/// The metadata injected into this build.
pub fn current() -> &'static Metadata {
    &CURRENT
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "unknown"
    } else {
        value
    }
}

/// Provenance of a build. Populated once and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub commit: String,
    pub build_date: String,
    pub source_url: String,
    pub license_text: String,
}

impl Metadata {
    pub fn new(
        commit: impl Into<String>,
        build_date: impl Into<String>,
        source_url: impl Into<String>,
        license_text: impl Into<String>,
    ) -> Self {
        Self {
            commit: commit.into(),
            build_date: build_date.into(),
            source_url: source_url.into(),
            license_text: license_text.into(),
        }
    }

    /// Reads the values `build.rs` injected into this crate.
    pub fn from_build_env() -> Self {
        Self::new(BUILD_COMMIT, BUILD_DATE, BUILD_URL, LICENSE_TEXT)
    }

    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = commit.into();
        self
    }

    pub fn with_build_date(mut self, build_date: impl Into<String>) -> Self {
        self.build_date = build_date.into();
        self
    }

    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = source_url.into();
        self
    }

    pub fn with_license_text(mut self, license_text: impl Into<String>) -> Self {
        self.license_text = license_text.into();
        self
    }

    /// One-line summary for banners and logs. Empty fields show as `unknown`.
    pub fn summary(&self, version: &str) -> String {
        format!(
            "{} (commit {}, built at {})",
            or_unknown(version),
            or_unknown(&self.commit),
            or_unknown(&self.build_date)
        )
    }

    /// Writes the commit, build date and releaser lines.
    pub fn write_metadata<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Git Commit: {}", self.commit)?;
        writeln!(out, "Build Date: {}", self.build_date)?;
        writeln!(out, "Releaser: {}", self.source_url)
    }

    /// Writes the license text verbatim plus a trailing newline.
    pub fn write_license<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.license_text)
    }

    pub fn print_metadata(&self) {
        to_stdout(|out| self.write_metadata(out));
    }

    pub fn print_license(&self) {
        to_stdout(|out| self.write_license(out));
    }
}

// Stdout failures are not surfaced to the caller; they only leave a trace.
pub(crate) fn to_stdout(write: impl FnOnce(&mut StdoutLock<'static>) -> io::Result<()>) {
    let mut out = io::stdout().lock();
    if let Err(err) = write(&mut out).and_then(|_| out.flush()) {
        tracing::warn!(event = events::OUTPUT_WRITE_FAILED, error = %err);
    }
}
