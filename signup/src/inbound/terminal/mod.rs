//! Line-oriented terminal front end for the signup flow.
//!
//! [`Terminal`] reads answers from any [`BufRead`] and writes prompts to any
//! [`Write`], so sessions can be scripted in tests. It doubles as the
//! [`Confirmation`] port: the registration prompt is a `[y/N]` question.
//! On an interactive terminal the password can be typed without echo; see
//! [`SecretEcho`].

mod secret;
mod session;

pub use self::secret::SecretEcho;
pub use self::session::{DECLINED_NOTICE, REQUIRED_NOTICE};

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::domain::ports::{Confirmation, ConfirmationError};
use crate::flow::FlowError;

/// Errors raised while driving a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerminalError {
    /// Reading input or writing prompts failed.
    #[error("terminal I/O failed: {message}")]
    Io {
        /// Description of the I/O failure.
        message: String,
    },
    /// Input ended before the registration was submitted.
    #[error("input closed before the registration was submitted")]
    Closed,
    /// The flow rejected an event.
    #[error(transparent)]
    Flow(#[from] FlowError),
}

impl From<io::Error> for TerminalError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Prompting front end over a reader and a writer.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
    secrets: SecretEcho,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Read answers from `input` and write prompts to `output`.
    ///
    /// Secrets are read from `input` like any other answer until
    /// [`Terminal::with_secret_echo`] says otherwise.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            secrets: SecretEcho::Visible,
        }
    }

    /// Choose how secret fields are read.
    #[must_use]
    pub fn with_secret_echo(self, secrets: SecretEcho) -> Self {
        Self { secrets, ..self }
    }

    /// Give up the terminal, returning the writer.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` without a newline and read one answer line.
    ///
    /// Returns `None` once input is exhausted. The trailing line ending is
    /// stripped.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.show(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']).to_owned();
        Ok(Some(answer))
    }

    /// Like `ask`, but masks the answer when secrets are hidden.
    fn ask_secret(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.secrets {
            SecretEcho::Visible => self.ask(prompt),
            SecretEcho::Hidden => {
                self.show(prompt)?;
                secret::read_hidden(&mut self.output)
            }
        }
    }

    fn show(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Confirmation for Terminal<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool, ConfirmationError> {
        let answer = self
            .ask(&format!("{prompt} [y/N]: "))
            .map_err(|err| ConfirmationError::Io {
                message: err.to_string(),
            })?
            .ok_or(ConfirmationError::Closed)?;
        Ok(is_yes(&answer))
    }
}

fn is_yes(answer: &str) -> bool {
    let word = answer.trim();
    word.eq_ignore_ascii_case("y") || word.eq_ignore_ascii_case("yes")
}
