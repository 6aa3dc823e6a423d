//! Interactive encode/decode session.
//!
//! Line-oriented dialogue around [`encode`] and [`decode`]:
//!
//! ```text
//! Please input operation (encode/decode/exit):
//! encode
//! Input string:
//! C
//! Encoded string:
//! 0 0 00 0000 0 00
//!
//! Please input operation (encode/decode/exit):
//! exit
//! Bye
//! ```

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::decode::decode;
use crate::encode::encode;

const OPERATION_PROMPT: &str = "Please input operation (encode/decode/exit):";

/// Operation requested at the session prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encode,
    Decode,
    Exit,
}

/// Prompt input that names no operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("There is no '{0}' operation")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encode" => Ok(Self::Encode),
            "decode" => Ok(Self::Decode),
            "exit" => Ok(Self::Exit),
            _ => Err(UnknownOperation(s.to_string())),
        }
    }
}

/// Prompt loop over any line source and sink.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{OPERATION_PROMPT}")?;
            self.output.flush()?;

            let Some(action) = self.read_line()? else {
                debug!("end of input, leaving session");
                break;
            };

            match action.parse::<Operation>() {
                Ok(Operation::Encode) => self.encode()?,
                Ok(Operation::Decode) => self.decode()?,
                Ok(Operation::Exit) => break,
                Err(unknown) => writeln!(self.output, "{unknown}\n")?,
            }
        }

        writeln!(self.output, "Bye")?;
        self.output.flush()
    }

    /// Give back the sink, e.g. to inspect a buffered transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    fn encode(&mut self) -> io::Result<()> {
        writeln!(self.output, "Input string:")?;
        self.output.flush()?;
        let text = self.read_line()?.unwrap_or_default();

        match encode(&text) {
            Ok(encoded) => writeln!(self.output, "Encoded string:\n{encoded}\n"),
            Err(err) => {
                debug!(%err, "rejected input string");
                writeln!(self.output, "Input string is not valid\n")
            }
        }
    }

    fn decode(&mut self) -> io::Result<()> {
        writeln!(self.output, "Input encoded string:")?;
        self.output.flush()?;
        let line = self.read_line()?.unwrap_or_default();

        match decode(&line) {
            Ok(decoded) => writeln!(self.output, "Decoded string:\n{decoded}\n"),
            Err(_) => writeln!(self.output, "Encoded string is not valid\n"),
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}
