//! Console input helpers.

use std::borrow::Cow;
use std::io::{self, BufRead};

/// Reads one line from a buffered reader, blocking until available.
///
/// Surrounding whitespace is trimmed. Bytes that are not valid UTF-8 are
/// replaced with `U+FFFD`, so a garbled line still comes back as text and is
/// rejected like any other bad input. Returns `Ok(None)` on EOF.
///
/// # Errors
///
/// Propagates read failures from the underlying stream.
///
/// # Example
///
/// ```rust,no_run
/// use std::io;
/// # use fourinarow_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle)? {
///     println!("You entered: {}", line);
/// }
/// # Ok::<(), io::Error>(())
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if stdin.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None); // EOF
    }
    let line = match String::from_utf8_lossy(&buf) {
        Cow::Borrowed(text) => text.trim().to_string(),
        Cow::Owned(text) => {
            tracing::debug!(bytes = buf.len(), "input line is not valid UTF-8");
            text.trim().to_string()
        }
    };
    Ok(Some(line))
}
