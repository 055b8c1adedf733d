//! Outbound adapters implementing the navigation and display ports.
//!
//! - **router**: path-keyed navigator that hands records to the display page
//! - **`json_display`**: writes a session record as indented JSON
//!
//! Adapters translate between domain types and their output medium. They
//! contain no validation logic.

pub mod json_display;
pub mod router;

pub use json_display::JsonDisplay;
pub use router::Router;
