//! Rules for turning `RELEASES_*` build variables into embedded values.
//!
//! Shared with `build.rs`, so this file must stay free of crate dependencies.
//! `build.rs` runs in this package's directory even when another program
//! depends on it, so nothing here falls back to this package's own git state
//! or license file.

use std::path::{Path, PathBuf};

/// Where the license text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseSource {
    NotInjected,
    File(PathBuf),
    /// Relative paths would resolve against this package, not the embedder.
    Relative(PathBuf),
}

/// An injected single-line value. Unset and blank both become empty.
pub fn injected_value(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

pub fn license_source(raw: Option<&str>) -> LicenseSource {
    let raw = injected_value(raw);
    if raw.is_empty() {
        return LicenseSource::NotInjected;
    }
    let path = Path::new(&raw);
    if path.is_absolute() {
        LicenseSource::File(path.to_path_buf())
    } else {
        LicenseSource::Relative(path.to_path_buf())
    }
}

/// License text as embedded: trailing newlines are dropped so printing adds
/// exactly one.
pub fn license_text(contents: &str) -> &str {
    contents.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injected_value_not_set_is_empty() {
        assert_eq!(injected_value(None), "");
        assert_eq!(injected_value(Some("   ")), "");
        assert_eq!(injected_value(Some(" abc123\n")), "abc123");
    }

    #[test]
    fn test_license_source_not_injected() {
        assert_eq!(license_source(None), LicenseSource::NotInjected);
        assert_eq!(license_source(Some("")), LicenseSource::NotInjected);
    }

    #[test]
    fn test_license_source_requires_absolute_path() {
        assert_eq!(
            license_source(Some("LICENSE")),
            LicenseSource::Relative(PathBuf::from("LICENSE"))
        );
        assert_eq!(
            license_source(Some("../app/LICENSE")),
            LicenseSource::Relative(PathBuf::from("../app/LICENSE"))
        );

        let abs = std::env::temp_dir().join("LICENSE");
        assert_eq!(
            license_source(abs.to_str()),
            LicenseSource::File(abs.clone())
        );
    }

    #[test]
    fn test_license_text_trailing_newlines() {
        assert_eq!(license_text("MIT License...\n\n"), "MIT License...");
        assert_eq!(license_text("a\r\nb\r\n"), "a\r\nb");
        assert_eq!(license_text(""), "");
    }
}
