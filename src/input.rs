use std::borrow::Cow;
use std::fs;
use std::iter;
use std::path::Path;

use crate::error::WordCountError;

/// Splits text into lines ended by `\n`, `\r` or `\r\n`. A final line
/// without a terminator is still a line; a trailing terminator does not open
/// an extra empty one.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Splits a single line on ASCII spaces. Runs of spaces, and spaces at either
/// end of the line, yield empty words unless `keep_empty` is false.
pub fn tokenize_line(line: &str, keep_empty: bool) -> impl Iterator<Item = &str> {
    line.split(' ').filter(move |word| keep_empty || !word.is_empty())
}

pub fn tokenize(text: &str, keep_empty: bool) -> Vec<String> {
    split_lines(text)
        .flat_map(|line| tokenize_line(line, keep_empty))
        .inspect(|word| log::trace!("Adding {word} to list of words parsed"))
        .map(str::to_string)
        .collect()
}

/// Reads `path` and returns its words in input order. Bytes that are not
/// valid UTF-8 are replaced with U+FFFD.
pub fn read_input(path: impl AsRef<Path>, keep_empty: bool) -> Result<Vec<String>, WordCountError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| WordCountError::io(path, e))?;

    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        log::warn!("{} is not valid UTF-8, malformed bytes were replaced", path.display());
    }

    let words = tokenize(&text, keep_empty);
    crate::log_stats!("input", "Parsed {} words from {}.", words.len(), path.display());
    Ok(words)
}
