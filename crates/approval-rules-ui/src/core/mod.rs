//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod error;
pub mod rule;
pub mod store;
pub mod theme;
