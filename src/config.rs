/// Compiled-in defaults; each one is overridable from the command line.
pub const DEFAULT_ADB_PATH: &str = "adb";
pub const DEFAULT_SCRCPY_PATH: &str = "scrcpy";
pub const DEFAULT_SCRCPY_ARGS: &str = "--audio-buffer=200 --video-bit-rate=8M --stay-awake";

/// Resolved run configuration, built once at startup and passed by reference
/// into every component.
#[derive(Debug, Clone)]
pub struct Config {
    /// Device bridge executable, name on PATH or absolute path.
    pub adb_path: String,
    /// Mirroring executable, name on PATH or absolute path.
    pub scrcpy_path: String,
    /// Whitespace-separated option string handed to the mirroring tool.
    pub scrcpy_args: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adb_path: DEFAULT_ADB_PATH.to_string(),
            scrcpy_path: DEFAULT_SCRCPY_PATH.to_string(),
            scrcpy_args: DEFAULT_SCRCPY_ARGS.to_string(),
        }
    }
}
