// Mirroring tool launch. scrcpy runs in the foreground with inherited stdio;
// when its window closes, the run is over.
use tokio::process::Command;

use crate::config::Config;
use crate::error::{Error, Result};

/// Splits the configured option string into argv tokens. Whitespace runs
/// collapse, so stray spaces in the config never produce empty arguments.
pub fn split_args(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Resolves the mirroring binary and runs it to completion against whatever
/// device adb currently has connected.
pub async fn launch(config: &Config) -> Result<()> {
    let binary = which::which(&config.scrcpy_path).map_err(|_| Error::MirrorNotFound {
        path: config.scrcpy_path.clone(),
    })?;
    let args = split_args(&config.scrcpy_args);
    println!("🚀 Launching {} {}", binary.display(), args.join(" "));
    let status = Command::new(&binary)
        .args(&args)
        .status()
        .await
        .map_err(|source| Error::ToolSpawnFailed {
            tool: binary.display().to_string(),
            source,
        })?;
    log::debug!("mirroring tool exited with {status}");
    if status.success() {
        Ok(())
    } else {
        Err(Error::MirrorFailed { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_args_drops_empty_tokens() {
        assert_eq!(
            split_args("  --audio-buffer=200   --video-bit-rate=8M "),
            vec!["--audio-buffer=200", "--video-bit-rate=8M"]
        );
    }

    #[test]
    fn split_args_preserves_order() {
        assert_eq!(split_args("a b c"), vec!["a", "b", "c"]);
        assert!(split_args("").is_empty());
        assert!(split_args("   ").is_empty());
    }
}
