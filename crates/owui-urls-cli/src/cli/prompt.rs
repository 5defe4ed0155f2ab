//! Line prompts over any reader/writer pair.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Print `message` (no newline), then read one line without its line terminator.
/// End of input reads as an empty line.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<String> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("read prompt answer")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_one_line_and_echoes_prompt() {
        let mut input = Cursor::new("chat.example.com\r\nnext\n");
        let mut out = Vec::new();
        let answer = prompt_line(&mut input, &mut out, "Address: ").unwrap();
        assert_eq!(answer, "chat.example.com");
        assert_eq!(String::from_utf8(out).unwrap(), "Address: ");

        let second = prompt_line(&mut input, &mut Vec::new(), "").unwrap();
        assert_eq!(second, "next");
    }

    #[test]
    fn eof_is_empty_answer() {
        let mut input = Cursor::new("");
        let answer = prompt_line(&mut input, &mut Vec::new(), "? ").unwrap();
        assert_eq!(answer, "");
    }
}
