//! Newline-terminated line files.

use std::fs;
use std::io;
use std::path::Path;

use crate::atomic_write::{AtomicWriteOptions, atomic_write_with_options};

/// Write one entry per line, each terminated by `\n`, replacing the file.
pub fn write_lines<I, S>(path: impl AsRef<Path>, lines: I, options: AtomicWriteOptions) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    atomic_write_with_options(path, out.as_bytes(), options)
}

/// Read a line file. A missing file yields `Ok(None)`.
pub fn read_lines(path: impl AsRef<Path>) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
