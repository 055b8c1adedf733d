//! Port for the page that shows a completed session record.

use thiserror::Error;

use crate::domain::SessionRecord;

/// Heading printed above the rendered record.
pub const DISPLAY_HEADING: &str = "User Registration Data";

/// Errors raised while rendering a session record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    /// The record could not be encoded for display.
    #[error("failed to encode session record: {message}")]
    Encode {
        /// Encoder error message.
        message: String,
    },
    /// The rendered output could not be written.
    #[error("failed to write session record: {message}")]
    Io {
        /// Description of the I/O failure.
        message: String,
    },
}

/// Renders a session record without validating it again.
#[cfg_attr(test, mockall::automock)]
pub trait SessionDisplay {
    /// Render `record` for the user.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError`] when encoding or writing fails.
    fn render(&mut self, record: &SessionRecord) -> Result<(), DisplayError>;
}
