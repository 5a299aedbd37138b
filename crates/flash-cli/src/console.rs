//! Line-oriented console that records a transcript.
//!
//! Every line shown to the user and every line read from them passes through
//! [`Console`], which keeps a verbatim copy for the `log` command.

use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Vec<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Vec::new(),
        }
    }

    /// Print one line and record it.
    pub fn say(&mut self, line: impl Into<String>) -> io::Result<()> {
        let line = line.into();
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        self.transcript.push(line);
        Ok(())
    }

    /// Read one line without its terminator and record it.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD. Returns `None` at end
    /// of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_owned();
        self.transcript.push(line.clone());
        Ok(Some(line))
    }

    /// Print `prompt`, then read the reply.
    pub fn prompt(&mut self, prompt: impl Into<String>) -> io::Result<Option<String>> {
        self.say(prompt)?;
        self.read_line()
    }

    /// Everything shown and read so far, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}
