//! Display page adapter writing the session record as pretty JSON.

use std::io::{self, Write};

use crate::domain::SessionRecord;
use crate::domain::ports::{DISPLAY_HEADING, DisplayError, SessionDisplay};

/// Writer-backed display page.
///
/// Prints [`DISPLAY_HEADING`], a blank line, then the record as two-space
/// indented JSON followed by a newline.
#[derive(Debug)]
pub struct JsonDisplay<W> {
    out: W,
}

impl<W: Write> JsonDisplay<W> {
    /// Render into `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give up the adapter, returning the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SessionDisplay for JsonDisplay<W> {
    fn render(&mut self, record: &SessionRecord) -> Result<(), DisplayError> {
        let body = record.to_json_pretty().map_err(|err| DisplayError::Encode {
            message: err.to_string(),
        })?;
        write_page(&mut self.out, &body).map_err(|err| DisplayError::Io {
            message: err.to_string(),
        })
    }
}

fn write_page<W: Write>(out: &mut W, body: &str) -> io::Result<()> {
    writeln!(out, "{DISPLAY_HEADING}")?;
    writeln!(out)?;
    writeln!(out, "{body}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CredentialInput, ProfileInput};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn record() -> SessionRecord {
        SessionRecord::new(
            CredentialInput::new("johndoe45", "a@b.com", "secret1"),
            ProfileInput {
                city: "Pune".to_owned(),
                ..ProfileInput::default()
            },
        )
    }

    #[test]
    fn renders_heading_then_indented_json() {
        let mut display = JsonDisplay::new(Vec::new());

        display.render(&record()).expect("render into memory");

        let page = String::from_utf8(display.into_inner()).expect("utf-8 output");
        let expected_body = record().to_json_pretty().expect("encode record");
        assert_eq!(page, format!("User Registration Data\n\n{expected_body}\n"));
        assert!(page.contains("\n  \"authData\": {\n    \"username\": \"johndoe45\","));
        assert!(page.contains("\"city\": \"Pune\""));
    }

    #[test]
    fn write_failures_surface_as_io_errors() {
        let mut display = JsonDisplay::new(BrokenPipe);

        let err = display.render(&record()).expect_err("writer is broken");

        assert_eq!(
            err,
            DisplayError::Io {
                message: "pipe closed".to_owned(),
            }
        );
    }
}
