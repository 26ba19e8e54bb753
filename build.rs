use chrono::Utc;
use std::{env, fs, io, path::Path};

#[path = "src/injection.rs"]
mod injection;

use injection::LicenseSource;

fn main() -> io::Result<()> {
    for var in [
        "RELEASES_GIT_COMMIT",
        "RELEASES_BUILD_DATE",
        "RELEASES_URL",
        "RELEASES_LICENSE_FILE",
    ] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=src/injection.rs");

    set_build_metadata();
    write_license_text()?;

    Ok(())
}

fn build_var(var: &str) -> String {
    injection::injected_value(env::var(var).ok().as_deref())
}

// Only explicitly injected values are used: this script also runs when the
// crate is a dependency, where its own git state says nothing about the
// program being built.
fn set_build_metadata() {
    let git_commit = build_var("RELEASES_GIT_COMMIT");

    let mut build_date = build_var("RELEASES_BUILD_DATE");
    if build_date.is_empty() {
        build_date = Utc::now().to_rfc3339();
    }

    let url = build_var("RELEASES_URL");

    println!("cargo:rustc-env=RELEASES_BUILD_COMMIT={}", git_commit);
    println!("cargo:rustc-env=RELEASES_BUILD_DATE={}", build_date);
    println!("cargo:rustc-env=RELEASES_BUILD_URL={}", url);
}

// rustc-env cannot carry newlines, so the license goes through OUT_DIR.
fn write_license_text() -> io::Result<()> {
    let raw = env::var("RELEASES_LICENSE_FILE").ok();
    let text = match injection::license_source(raw.as_deref()) {
        LicenseSource::NotInjected => String::new(),
        LicenseSource::Relative(path) => {
            println!(
                "cargo:warning=RELEASES_LICENSE_FILE must be an absolute path, got {}; embedding empty license text",
                path.display()
            );
            String::new()
        }
        LicenseSource::File(path) => {
            println!("cargo:rerun-if-changed={}", path.display());
            match fs::read_to_string(&path) {
                Ok(contents) => injection::license_text(&contents).to_string(),
                Err(err) => {
                    println!(
                        "cargo:warning=license file {} unreadable ({}), embedding empty text",
                        path.display(),
                        err
                    );
                    String::new()
                }
            }
        }
    };

    let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    fs::write(Path::new(&out_dir).join("license.txt"), text)
}
