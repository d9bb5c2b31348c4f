// Single choke point for invoking the adb binary. Every adb feature this tool
// uses goes through `run_adb`; the binary's text output and exit status are
// the whole interface.
use tokio::process::Command;

use crate::config::Config;
use crate::error::{Error, Result};

/// Captured result of one adb invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit status was zero.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// stdout and stderr joined and lowercased, the form the outcome pattern
    /// tables match against.
    pub fn combined_lower(&self) -> String {
        format!("{}{}", self.stdout, self.stderr).to_lowercase()
    }

    /// Human-readable failure detail: stderr when present, stdout otherwise.
    pub fn detail(&self) -> String {
        let err = self.stderr.trim();
        if err.is_empty() {
            self.stdout.trim().to_string()
        } else {
            err.to_string()
        }
    }
}

/// Runs `adb <args>` to completion and captures its output. Only failing to
/// spawn is an error here; what the exit status and text mean is the
/// caller's call.
pub async fn run_adb(config: &Config, args: &[&str]) -> Result<ToolOutput> {
    log::debug!("running: {} {}", config.adb_path, args.join(" "));
    let output = Command::new(&config.adb_path)
        .args(args)
        .output()
        .await
        .map_err(|source| Error::ToolSpawnFailed {
            tool: config.adb_path.clone(),
            source,
        })?;
    let out = ToolOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    log::debug!(
        "adb {} -> success={} stdout={:?} stderr={:?}",
        args.first().unwrap_or(&""),
        out.success,
        out.stdout.trim(),
        out.stderr.trim()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_prefers_stderr() {
        let out = ToolOutput {
            success: false,
            stdout: "some stdout\n".to_string(),
            stderr: "real error\n".to_string(),
        };
        assert_eq!(out.detail(), "real error");
    }

    #[test]
    fn detail_falls_back_to_stdout() {
        let out = ToolOutput {
            success: false,
            stdout: "failed to connect to 10.0.0.2:5555\n".to_string(),
            stderr: "  ".to_string(),
        };
        assert_eq!(out.detail(), "failed to connect to 10.0.0.2:5555");
    }
}
