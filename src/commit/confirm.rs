//! Yes/no confirmation read from a line of input.

use std::io::{self, BufRead};

/// Whether `input` is an affirmative answer.
///
/// Case-insensitive and whitespace-trimmed; only `y` and `yes` count.
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Read one line from `reader` and report whether it confirms.
///
/// End of input and non-UTF-8 bytes count as a refusal.
pub fn read_confirmation<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    Ok(is_affirmative(&String::from_utf8_lossy(&line)))
}
