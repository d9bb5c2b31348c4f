use std::env;
use std::process::Command;
use time::OffsetDateTime;

// Stamps APP_VERSION_DISPLAY for `--version`: the plain package version when
// the checkout matches its release tag (or in release builds), `X.Y.Z-dev`
// otherwise.
fn main() {
    let package_version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    println!("cargo:rerun-if-env-changed=CARGO_PKG_VERSION");

    let year = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(|epoch| OffsetDateTime::from_unix_timestamp(epoch).ok())
        .map(|dt| dt.year())
        .unwrap_or_else(|| OffsetDateTime::now_utc().year());
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rustc-env=APP_BUILD_YEAR={year}");

    let profile = env::var("PROFILE").unwrap_or_default();
    let display_version = if profile == "release" {
        package_version
    } else {
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/refs/tags");
        let tagged = Command::new("git")
            .args(["describe", "--tags", "--exact-match"])
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| String::from_utf8(output.stdout).ok())
            .is_some_and(|tag| tag.trim() == format!("v{package_version}"));
        if tagged {
            package_version
        } else {
            format!("{package_version}-dev")
        }
    };
    println!("cargo:rustc-env=APP_VERSION_DISPLAY={display_version}");
}
