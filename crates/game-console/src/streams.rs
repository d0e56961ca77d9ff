//! Standard stream adapters
//!
//! [`OutputWriter`] and [`InputReader`] stand in for stdout / stderr / stdin.
//! They are handed explicitly to whatever subsystem should talk to the
//! console; nothing global is replaced.

use crate::console::ConsoleHandle;
use crate::error::ConsoleError;
use crate::model::OutputCategory;
use std::future::Future;
use std::{fmt, io};

/// Writes text into the console as one output category.
///
/// Text between newlines merges into the current line; a newline ends it.
/// Bytes go through a UTF-8 decoder that carries an incomplete trailing
/// sequence over to the next write, and replaces invalid bytes with U+FFFD.
#[derive(Debug)]
pub struct OutputWriter {
    handle: ConsoleHandle,
    category: OutputCategory,
    carry: Vec<u8>,
}

impl OutputWriter {
    pub fn new(handle: ConsoleHandle, category: OutputCategory) -> Self {
        Self {
            handle,
            category,
            carry: Vec::new(),
        }
    }

    /// Writer producing info lines.
    pub fn stdout(handle: ConsoleHandle) -> Self {
        Self::new(handle, OutputCategory::Info)
    }

    /// Writer producing error lines.
    pub fn stderr(handle: ConsoleHandle) -> Self {
        Self::new(handle, OutputCategory::Error)
    }

    pub fn category(&self) -> OutputCategory {
        self.category
    }

    fn decode(&mut self, buf: &[u8]) -> String {
        self.carry.extend_from_slice(buf);

        let mut text = String::new();
        let mut rest: &[u8] = &self.carry;
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    text.push_str(valid);
                    rest = &[];
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    text.push_str(&String::from_utf8_lossy(valid));
                    match e.error_len() {
                        Some(len) => {
                            text.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        None => {
                            rest = after;
                            break;
                        }
                    }
                }
            }
        }

        self.carry = rest.to_vec();
        text
    }
}

impl io::Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = self.decode(buf);
        if !text.is_empty() {
            self.handle
                .write_stream(&text, self.category)
                .map_err(io::Error::other)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Write for OutputWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.handle
            .write_stream(s, self.category)
            .map_err(|_| fmt::Error)
    }
}

/// Reads committed input lines from the console.
///
/// A read only completes when the host ticks the console after Enter, so the
/// blocking reads must never run on the thread that calls
/// [`Console::update`](crate::Console::update).
#[derive(Debug, Clone)]
pub struct InputReader {
    handle: ConsoleHandle,
    buffer: Vec<u8>,
    pos: usize,
}

impl InputReader {
    pub fn new(handle: ConsoleHandle) -> Self {
        Self {
            handle,
            buffer: Vec::new(),
            pos: 0,
        }
    }

    /// Put the console into Reading without waiting.
    pub fn begin_read(&self) -> Result<bool, ConsoleError> {
        self.handle.begin_read()
    }

    /// Block until the next line is committed.
    ///
    /// Must not be called from inside an async runtime; use
    /// [`InputReader::read_line_async`] there.
    pub fn read_line(&self) -> Result<String, ConsoleError> {
        self.handle
            .subscribe_line()?
            .blocking_recv()
            .map_err(|_| ConsoleError::ReadAborted)
    }

    /// Resolves with the next committed line.
    ///
    /// The read begins immediately, before the future is first polled, and
    /// completes during the tick that flushes the commit.
    pub fn read_line_async(
        &self,
    ) -> impl Future<Output = Result<String, ConsoleError>> + Send + use<> {
        let receiver = self.handle.subscribe_line();
        async move { receiver?.await.map_err(|_| ConsoleError::ReadAborted) }
    }
}

impl io::Read for InputReader {
    /// Serves committed lines, each terminated by `\n`.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.pos >= self.buffer.len() {
            let mut line = self.read_line().map_err(io::Error::other)?;
            line.push('\n');
            self.buffer = line.into_bytes();
            self.pos = 0;
        }

        let available = &self.buffer[self.pos..];
        let count = available.len().min(buf.len());
        buf[..count].copy_from_slice(&available[..count]);
        self.pos += count;
        Ok(count)
    }
}
