//! Approval rule editor feature wiring.
//!
//! # Design
//! - The editor owns its form state; nothing outside this slice mutates it.
//! - Save and reset only raise notifications; the rule is never stored or sent.

pub mod actions;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
