//! Inbound adapters that translate user input into signup flow events.
//!
//! The terminal front end lives under [`terminal`]; other transports would
//! sit alongside it.

pub mod terminal;
