// Device selection: auto-select a lone device, otherwise a 1-based menu with
// a single chance at valid input.
use crate::adb::DeviceRecord;
use crate::error::{Error, Result};
use crate::prompt;

/// Picks one record. Zero records is `None` (the caller decides that's the
/// end of the run); one record is chosen without any prompt; more than one
/// shows a menu and reads exactly one line. Bad input aborts rather than
/// re-prompting.
pub fn select_device(mut records: Vec<DeviceRecord>) -> Result<Option<DeviceRecord>> {
    match records.len() {
        0 => Ok(None),
        1 => {
            let record = records.remove(0);
            println!("📱 One device found: {} ({})", record.id, record.state);
            Ok(Some(record))
        }
        count => {
            println!("Devices:");
            for (i, record) in records.iter().enumerate() {
                println!("  {}. {} ({})", i + 1, record.id, record.state);
            }
            let input = prompt::read_line(&format!("Select a device [1-{count}]: "))?;
            match parse_selection(&input, count) {
                Some(index) => Ok(records.into_iter().nth(index)),
                None => Err(Error::SelectionInvalid { input, count }),
            }
        }
    }
}

/// Interprets menu input: an integer in `[1, count]` maps to a zero-based
/// index, anything else is rejected.
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    if (1..=count).contains(&choice) {
        Some(choice - 1)
    } else {
        None
    }
}
