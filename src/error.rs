use std::process::ExitStatus;
use thiserror::Error;

/// A specialized `Result` type for connect-and-mirror operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for every step of a run. Anything surfacing here is fatal;
/// soft conditions (daemon autostart notices, unparseable listing lines) are
/// logged and skipped instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to run '{tool}': {source}. Is it installed and on PATH?")]
    ToolSpawnFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ADB server is not responding, even after 'adb start-server'.")]
    ServerUnresponsive,

    #[error("'adb {command}' failed: {detail}")]
    AdbCommandFailed { command: String, detail: String },

    #[error("No devices found. Plug in a device or enable wireless debugging, then retry.")]
    NoDevices,

    #[error("Invalid selection '{input}': expected a number between 1 and {count}")]
    SelectionInvalid { input: String, count: usize },

    #[error("Failed to read input: {source}")]
    InputRead {
        #[from]
        source: std::io::Error,
    },

    #[error("Pairing with {address} was rejected: {detail}")]
    PairingRejected { address: String, detail: String },

    #[error("Could not connect to {address}: {detail}")]
    ConnectRejected { address: String, detail: String },

    #[error(
        "Device {serial} is in state '{state}'. Accept the USB debugging prompt on the device, then retry."
    )]
    DeviceNotAuthorized { serial: String, state: String },

    #[error("Mirroring tool not found at '{path}'. Install scrcpy or pass --scrcpy=PATH.")]
    MirrorNotFound { path: String },

    #[error("Mirroring tool exited with {status}")]
    MirrorFailed { status: ExitStatus },
}
