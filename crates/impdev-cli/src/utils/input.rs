//! User input for interactive prompts.
//!
//! On a terminal the prompt is written to stderr and the answer read with
//! `console` (secret answers are not echoed). When stdin is piped, one line
//! is taken from it per prompt so answers can be scripted.

use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;

/// Reads one answer for `prompt`.
///
/// Returns `Ok(None)` when stdin is closed.
///
/// # Errors
///
/// Returns an error if the terminal or stdin cannot be read.
pub fn prompt_line(prompt: &str, secret: bool) -> io::Result<Option<String>> {
    if io::stdin().is_terminal() {
        let term = Term::stderr();
        term.write_str(&format!("{prompt}: "))?;
        let line = if secret {
            term.read_secure_line()?
        } else {
            term.read_line()?
        };
        return Ok(Some(line));
    }

    // Keep the prompt visible when only stdin is redirected.
    let mut stderr = io::stderr();
    writeln!(stderr, "{prompt}: ")?;
    read_answer(&mut io::stdin().lock())
}

/// Takes one line from `reader`, without its line ending.
pub(crate) fn read_answer(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}
