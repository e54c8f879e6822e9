//! Feature slices for the approval rules UI.

pub mod rules;
