// ADB daemon probing. `adb devices` doubles as the health check: its output
// carries well-known markers when the background daemon is missing or was
// just autostarted.
use std::time::Duration;

use super::exec::{ToolOutput, run_adb};
use crate::config::Config;
use crate::error::{Error, Result};

const DAEMON_MISSING_MARKERS: &[&str] = &[
    "daemon not running",
    "cannot connect to daemon",
    "failed to check server version",
];

const DAEMON_STARTED_MARKER: &str = "daemon started successfully";

/// Delay between `adb start-server` and the single re-probe.
const SERVER_START_DELAY: Duration = Duration::from_secs(2);

/// Makes sure the ADB daemon is up: probe, and if it looks down, start it,
/// wait, and probe exactly once more. Still down after that is fatal.
pub async fn ensure_server(config: &Config) -> Result<()> {
    if probe(config).await? {
        log::debug!("adb server is responsive");
        return Ok(());
    }
    println!("ADB server not running, starting it...");
    run_adb(config, &["start-server"]).await?;
    tokio::time::sleep(SERVER_START_DELAY).await;
    if probe(config).await? {
        return Ok(());
    }
    Err(Error::ServerUnresponsive)
}

async fn probe(config: &Config) -> Result<bool> {
    let out = run_adb(config, &["devices"]).await?;
    Ok(probe_says_responsive(&out))
}

/// Decides responsiveness from one `adb devices` run. The autostart notice
/// means the daemon is up now, so it counts as responsive (with a warning,
/// since the startup banner can hide real listing output).
fn probe_says_responsive(out: &ToolOutput) -> bool {
    let text = out.combined_lower();
    if text.contains(DAEMON_STARTED_MARKER) {
        log::warn!("adb autostarted its daemon during the probe");
        return true;
    }
    if !out.success {
        return false;
    }
    !DAEMON_MISSING_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(success: bool, stdout: &str, stderr: &str) -> ToolOutput {
        ToolOutput {
            success,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn clean_listing_is_responsive() {
        let out = output(true, "List of devices attached\nabc123\tdevice\n", "");
        assert!(probe_says_responsive(&out));
    }

    #[test]
    fn missing_daemon_markers_mean_down() {
        let out = output(
            false,
            "",
            "error: cannot connect to daemon at tcp:5037: Connection refused\n",
        );
        assert!(!probe_says_responsive(&out));
    }

    #[test]
    fn autostart_banner_counts_as_responsive() {
        let out = output(
            true,
            "List of devices attached\n",
            "* daemon not running; starting now at tcp:5037\n* daemon started successfully\n",
        );
        assert!(probe_says_responsive(&out));
    }

    #[test]
    fn nonzero_exit_without_markers_is_down() {
        let out = output(false, "", "some unrelated error\n");
        assert!(!probe_says_responsive(&out));
    }
}
