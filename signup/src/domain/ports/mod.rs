//! Ports through which the signup flow reaches its collaborators.
//!
//! The flow owns no I/O. Confirmation prompts, navigation and rendering are
//! expressed as traits here; adapters live under `inbound` and `outbound`.

mod confirmation;
mod display;
mod navigation;

pub use confirmation::{AutoConfirmation, Confirmation, ConfirmationError, REGISTRATION_PROMPT};
pub use display::{DISPLAY_HEADING, DisplayError, SessionDisplay};
pub use navigation::{NavigationError, Navigator, Route};

#[cfg(test)]
pub use confirmation::MockConfirmation;
#[cfg(test)]
pub use display::MockSessionDisplay;
#[cfg(test)]
pub use navigation::MockNavigator;
