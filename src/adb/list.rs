// Device enumeration via `adb devices -l`.
use super::exec::run_adb;
use super::types::DeviceRecord;
use crate::config::Config;
use crate::error::{Error, Result};

/// Lists attached devices. One listing per run; records are never cached.
pub async fn list_devices(config: &Config) -> Result<Vec<DeviceRecord>> {
    let out = run_adb(config, &["devices", "-l"]).await?;
    if !out.success {
        return Err(Error::AdbCommandFailed {
            command: "devices -l".to_string(),
            detail: out.detail(),
        });
    }
    Ok(parse_listing(&out.stdout))
}

/// Parses `adb devices -l` output: drop the header line, skip blanks, and
/// keep every line that parses as `<id> <state> <properties...>`. Anything
/// else is skipped with a debug note, not an error.
pub fn parse_listing(output: &str) -> Vec<DeviceRecord> {
    output
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let record = DeviceRecord::from_line(line);
            if record.is_none() {
                log::debug!("skipping unparseable listing line: {line:?}");
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_listing_multiple() {
        let adb_output = "List of devices attached\n\
            1d36d8f1               device usb:1-4 product:OnePlus6 model:ONEPLUS_A6000 transport_id:2\n\
            192.168.1.5:5555       device product:OnePlus6 model:ONEPLUS_A6000 transport_id:3\n";
        let records = parse_listing(adb_output);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1d36d8f1");
        assert!(!records[0].is_wireless());
        assert_eq!(records[1].id, "192.168.1.5:5555");
        assert!(records[1].is_wireless());
    }

    #[test]
    fn parse_listing_skips_header_and_blanks() {
        let adb_output = "List of devices attached\n\n  \nabc123 unauthorized\n\n";
        let records = parse_listing(adb_output);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].state, "unauthorized");
    }

    #[test]
    fn parse_listing_count_matches_wellformed_lines() {
        // Two well-formed lines, one garbage single-token line: the record
        // count must equal the well-formed count.
        let adb_output =
            "List of devices attached\nserial1 device\nnotadeviceline\nserial2 offline extra\n";
        let records = parse_listing(adb_output);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].properties, "extra");
    }

    #[test]
    fn parse_listing_empty_output() {
        assert!(parse_listing("List of devices attached\n").is_empty());
        assert!(parse_listing("").is_empty());
    }
}
