// Blocking interactive input. The whole pipeline is sequential, so plain
// synchronous stdin reads are fine here.
use std::io::{self, Write};

/// Prints `message`, flushes, and blocks on one line of stdin. Returns the
/// line with surrounding whitespace trimmed.
pub fn read_line(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
