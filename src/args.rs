use std::env;

use crate::config::{self, Config};

#[derive(Debug)]
pub struct Args {
    pub config: Config,
}

impl Args {
    /// Parses the command line into a run configuration. Returns `None` when
    /// the invocation already did its job (help/version) or was invalid.
    pub fn parse() -> Option<Self> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from(args: impl Iterator<Item = String>) -> Option<Self> {
        let mut config = Config::default();

        for arg in args {
            if arg == "--help" || arg == "-h" {
                print_help();
                return None;
            } else if arg == "--version" || arg == "-v" {
                println!(
                    "Android Mirror Run v{} ({})",
                    env!("APP_VERSION_DISPLAY"),
                    env!("APP_BUILD_YEAR")
                );
                return None;
            } else if let Some(path) = arg.strip_prefix("--adb=") {
                config.adb_path = path.to_string();
            } else if let Some(path) = arg.strip_prefix("--scrcpy=") {
                config.scrcpy_path = path.to_string();
            } else if let Some(raw) = arg.strip_prefix("--scrcpy-args=") {
                config.scrcpy_args = raw.to_string();
            } else {
                eprintln!("❌ Unknown argument: {arg}");
                print_help();
                return None;
            }
        }

        Some(Args { config })
    }
}

fn print_help() {
    println!("📱 Android Mirror Run");
    println!();
    println!("Connects to a device over USB or ADB wireless debugging, then mirrors it.");
    println!();
    println!("USAGE:");
    println!("    android-mirror-run [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    --adb=PATH          Device bridge executable (default: {})", config::DEFAULT_ADB_PATH);
    println!("    --scrcpy=PATH       Mirroring executable (default: {})", config::DEFAULT_SCRCPY_PATH);
    println!("    --scrcpy-args=ARGS  Options passed to the mirroring tool");
    println!("                        (default: \"{}\")", config::DEFAULT_SCRCPY_ARGS);
    println!("    --help, -h          Show this help message");
    println!("    --version, -v       Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    android-mirror-run");
    println!("    android-mirror-run --scrcpy-args=\"--video-bit-rate=4M --max-fps=30\"");
    println!("    android-mirror-run --adb=/opt/platform-tools/adb");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(flags: &[&str]) -> Option<Args> {
        Args::parse_from(flags.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_flags_yields_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.config.adb_path, config::DEFAULT_ADB_PATH);
        assert_eq!(args.config.scrcpy_path, config::DEFAULT_SCRCPY_PATH);
        assert_eq!(args.config.scrcpy_args, config::DEFAULT_SCRCPY_ARGS);
    }

    #[test]
    fn path_flags_override_defaults() {
        let args = parse(&[
            "--adb=/opt/platform-tools/adb",
            "--scrcpy=/usr/local/bin/scrcpy",
            "--scrcpy-args=--max-fps=30",
        ])
        .unwrap();
        assert_eq!(args.config.adb_path, "/opt/platform-tools/adb");
        assert_eq!(args.config.scrcpy_path, "/usr/local/bin/scrcpy");
        assert_eq!(args.config.scrcpy_args, "--max-fps=30");
    }

    #[test]
    fn unknown_flag_aborts_parsing() {
        assert!(parse(&["--bogus"]).is_none());
    }
}
