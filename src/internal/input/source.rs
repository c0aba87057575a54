//! Line acquisition: scripted replay or an interactive prompt.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Something that can hand the session one line of text at a time.
pub trait LineSource {
    /// Read the next line, showing `prompt` where that makes sense.
    ///
    /// `Ok(None)` means the source is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Whether running out of input means the operator went away.
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Pre-supplied lines replayed in order.
#[derive(Debug, Default, Clone)]
pub struct ScriptSource {
    lines: VecDeque<String>,
}

impl ScriptSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a script file. Blank lines and `#` comments are skipped; bytes
    /// that are not UTF-8 are replaced rather than rejected.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        ))
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptSource {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Prompted reads from a terminal-like reader/writer pair.
pub struct ConsoleSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl ConsoleSource<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineSource for ConsoleSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        while let Some(b'\n' | b'\r') = buf.last() {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
