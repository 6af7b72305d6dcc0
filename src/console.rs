//! Line-oriented text I/O shared by the human seat and the session.
//!
//! The console borrows its streams so the binary can bind it to locked
//! stdin/stdout while tests bind it to a [`std::io::Cursor`] and a `Vec<u8>`.
use std::fmt::Display;
use std::io::BufRead;
use std::io::Write;

pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Write one line of transcript.
    pub fn say(&mut self, line: impl Display) -> anyhow::Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Write `prompt` without a trailing newline and block until a full line
    /// arrives. The line terminator is stripped.
    ///
    /// End of input is an error: every caller re-prompts on bad input, so
    /// a closed stream would otherwise never terminate.
    pub fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let ref mut line = String::new();
        match self.input.read_line(line)? {
            0 => anyhow::bail!("input closed while waiting for a reply to {:?}", prompt),
            _ => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}
