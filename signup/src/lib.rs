//! Two-step account signup flow.
//!
//! The first step collects credentials, the second personal and
//! government-ID details. Each step validates its fields against fixed
//! rules before moving on; the finished record is confirmed with the user and
//! handed to a display page.
//!
//! - [`domain`]: step records, field rules and ports
//! - [`flow`]: form state and the step controller
//! - [`inbound`]: the terminal front end
//! - [`outbound`]: router and JSON display page
//! - [`config`]: runtime settings

pub mod config;
pub mod domain;
pub mod flow;
pub mod inbound;
pub mod outbound;

pub use config::SignupSettings;
pub use flow::SignupFlow;
