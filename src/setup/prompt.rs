//! Console prompting
//!
//! Wraps a line reader and a writer so every interactive step can be driven
//! from real stdin/stdout or from in-memory buffers in tests.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};

/// Line-based console prompter
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write text without a trailing newline and flush it
    pub fn say(&mut self, text: &str) -> TrackerResult<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read one line with the line terminator removed
    ///
    /// `waiting_for` names the value being asked for, used when the input is
    /// closed before a line arrives.
    pub fn read_line(&mut self, waiting_for: &str) -> TrackerResult<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(TrackerError::InputClosed(waiting_for.to_string()));
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prompt until `parse` accepts a line
    ///
    /// On a retryable error `rejection` is printed and the prompt repeated.
    /// The rejected line is consumed, so the same input cannot trip the next
    /// attempt.
    pub fn ask<T, F>(&mut self, prompt: &str, rejection: &str, parse: F) -> TrackerResult<T>
    where
        F: FnMut(&str) -> TrackerResult<T>,
    {
        self.ask_loop(prompt, rejection, true, parse)
    }

    /// Like [`ask`](Self::ask), but `rejection` itself serves as the follow-up
    /// prompt and the original prompt is shown only once.
    pub fn ask_insisting<T, F>(
        &mut self,
        prompt: &str,
        rejection: &str,
        parse: F,
    ) -> TrackerResult<T>
    where
        F: FnMut(&str) -> TrackerResult<T>,
    {
        self.ask_loop(prompt, rejection, false, parse)
    }

    fn ask_loop<T, F>(
        &mut self,
        prompt: &str,
        rejection: &str,
        repeat_prompt: bool,
        mut parse: F,
    ) -> TrackerResult<T>
    where
        F: FnMut(&str) -> TrackerResult<T>,
    {
        let waiting_for = prompt.trim().trim_end_matches(':').trim_end();
        self.say(prompt)?;

        loop {
            let line = self.read_line(waiting_for)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() => {
                    debug!(input = %line, error = %err, "rejected input");
                    self.say(rejection)?;
                    if repeat_prompt {
                        self.say(prompt)?;
                    }
                }
                Err(err) => return Err(err),
            }
        }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Give back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
