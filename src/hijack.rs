//! Interception of the `--buildinfo` and `--license` startup flags.
//!
//! [`scan`] decides what to do without side effects, [`render`] produces the
//! output for that decision, and [`hijack`] is the wrapper an embedding
//! program calls as the first statement of `main`: it prints and exits the
//! process when a flag matched, and returns otherwise.

use std::ffi::OsStr;
use std::io::{self, Write};

use crate::build_info::{to_stdout, Metadata};
use crate::util::logging::standards::events;

pub const BUILDINFO_FLAG: &str = "--buildinfo";
pub const LICENSE_FLAG: &str = "--license";

/// Outcome of scanning the startup arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No flag matched; the caller keeps running.
    Continue,
    ShowBuildInfo,
    ShowLicense,
}

impl Action {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Action::Continue)
    }
}

/// Returns the action for the first argument that is exactly one of the two
/// flags. Arguments must not include the program name.
pub fn scan<I>(args: I) -> Action
where
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
{
    for (position, arg) in args.into_iter().enumerate() {
        let arg = arg.as_ref();
        if arg == BUILDINFO_FLAG {
            tracing::debug!(event = events::HIJACK_MATCH, flag = BUILDINFO_FLAG, position);
            return Action::ShowBuildInfo;
        }
        if arg == LICENSE_FLAG {
            tracing::debug!(event = events::HIJACK_MATCH, flag = LICENSE_FLAG, position);
            return Action::ShowLicense;
        }
    }
    Action::Continue
}

/// Writes the output of `action`. `Continue` writes nothing.
pub fn render<W: Write>(
    action: Action,
    version: &str,
    metadata: &Metadata,
    out: &mut W,
) -> io::Result<()> {
    match action {
        Action::Continue => Ok(()),
        Action::ShowBuildInfo => {
            write_version(out, version)?;
            metadata.write_metadata(out)?;
            write_license_hint(out)
        }
        Action::ShowLicense => metadata.write_license(out),
    }
}

fn write_version<W: Write>(out: &mut W, version: &str) -> io::Result<()> {
    writeln!(out, "Version: {}", version)
}

fn write_license_hint<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "For license, see {}", LICENSE_FLAG)
}

/// Like [`hijack`], but over an explicit argument list.
///
/// Never returns when a flag matched: the output goes to stdout and the
/// process exits with status 0. Otherwise returns [`Action::Continue`].
pub fn hijack_args<I>(version: &str, metadata: &Metadata, args: I) -> Action
where
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
{
    let action = scan(args);
    tracing::trace!(event = events::HIJACK_SCAN, ?action);
    match action {
        Action::Continue => return action,
        Action::ShowBuildInfo => {
            to_stdout(|out| write_version(out, version));
            metadata.print_metadata();
            to_stdout(write_license_hint);
        }
        Action::ShowLicense => metadata.print_license(),
    }
    std::process::exit(0);
}

/// Handles `--buildinfo` and `--license` in the process arguments.
///
/// ```no_run
/// fn main() {
///     releases::hijack(env!("CARGO_PKG_VERSION"), releases::build_info::current());
///     // application logic
/// }
/// ```
pub fn hijack(version: &str, metadata: &Metadata) {
    hijack_args(version, metadata, std::env::args_os().skip(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Metadata {
        Metadata::new(
            "abc123",
            "2024-01-01",
            "https://example.com",
            "MIT License...",
        )
    }

    fn output(action: Action, version: &str, metadata: &Metadata) -> String {
        let mut buf = Vec::new();
        render(action, version, metadata, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_scan_without_flags_continues() {
        assert_eq!(scan(["--verbose"]), Action::Continue);
        assert_eq!(scan(Vec::<String>::new()), Action::Continue);
        assert_eq!(scan(["run", "-v", "--", "file.txt"]), Action::Continue);
    }

    #[test]
    fn test_scan_matches_any_position() {
        assert_eq!(scan(["--buildinfo"]), Action::ShowBuildInfo);
        assert_eq!(scan(["serve", "--port", "80", "--buildinfo"]), Action::ShowBuildInfo);
        assert_eq!(scan(["a", "--license", "b"]), Action::ShowLicense);
    }

    #[test]
    fn test_scan_first_flag_wins() {
        assert_eq!(scan(["--license", "--buildinfo"]), Action::ShowLicense);
        assert_eq!(scan(["--buildinfo", "--license"]), Action::ShowBuildInfo);
    }

    #[test]
    fn test_scan_exact_tokens_only() {
        assert_eq!(scan(["--buildinfo=x"]), Action::Continue);
        assert_eq!(scan(["--license=MIT"]), Action::Continue);
        assert_eq!(scan(["-buildinfo", "--LICENSE", " --license"]), Action::Continue);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_non_utf8_argument() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let args = vec![OsString::from_vec(vec![0xff, 0xfe]), OsString::from("--license")];
        assert_eq!(scan(&args), Action::ShowLicense);
    }

    #[test]
    fn test_render_buildinfo() {
        assert_eq!(
            output(Action::ShowBuildInfo, "1.2.3", &sample()),
            "Version: 1.2.3\n\
             Git Commit: abc123\n\
             Build Date: 2024-01-01\n\
             Releaser: https://example.com\n\
             For license, see --license\n"
        );
    }

    #[test]
    fn test_render_buildinfo_unset_fields() {
        assert_eq!(
            output(Action::ShowBuildInfo, "", &Metadata::default()),
            "Version: \nGit Commit: \nBuild Date: \nReleaser: \nFor license, see --license\n"
        );
    }

    #[test]
    fn test_render_license() {
        assert_eq!(output(Action::ShowLicense, "1.2.3", &sample()), "MIT License...\n");
    }

    #[test]
    fn test_render_continue_is_silent() {
        assert!(output(Action::Continue, "1.2.3", &sample()).is_empty());
    }

    #[test]
    fn test_hijack_args_returns_without_flags() {
        let action = hijack_args("1.2.3", &sample(), ["--verbose", "--buildinfo=x"]);
        assert_eq!(action, Action::Continue);
        assert!(!action.is_terminal());
        assert!(Action::ShowLicense.is_terminal());
    }
}
