//! Interactive confirmation
//!
//! The blocking line read is kept behind a small trait so the driver can
//! be exercised in tests with canned input instead of real standard input.

use std::io::{self, BufRead, Write};

/// A source of operator input, one line at a time
pub trait LineReader {
    /// Reads one line of input
    ///
    /// # Returns
    /// * `Ok(Some(line))` - A line was read (without the trailing newline)
    /// * `Ok(None)` - End of input
    /// * `Err(_)` - The input could not be read
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// LineReader backed by standard input
#[derive(Debug, Default)]
pub struct StdinLineReader;

impl LineReader for StdinLineReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut line)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// LineReader over a fixed sequence of answers, for tests
#[derive(Debug, Default)]
pub struct CannedLineReader {
    lines: Vec<String>,
}

impl CannedLineReader {
    pub fn new(input: &str) -> CannedLineReader {
        CannedLineReader {
            lines: input.lines().rev().map(str::to_string).collect(),
        }
    }
}

impl LineReader for CannedLineReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop())
    }
}

/// Asks a yes/no question and reads one line of operator input
///
/// An answer is affirmative iff its first character is `y` or `Y`.
/// Anything else declines, including an empty line, end of input, and a
/// failed read. The original aborted on a failed read; declining keeps a
/// closed stdin from killing the remaining files.
pub fn confirm<R: LineReader>(reader: &mut R, question: &str) -> bool {
    print!("{question} (y/n): ");
    let _ = io::stdout().flush();

    match reader.read_line() {
        Ok(Some(answer)) => is_affirmative(&answer),
        Ok(None) | Err(_) => false,
    }
}

fn is_affirmative(answer: &str) -> bool {
    answer
        .chars()
        .next()
        .map(|c| c.eq_ignore_ascii_case(&'y'))
        .unwrap_or(false)
}
