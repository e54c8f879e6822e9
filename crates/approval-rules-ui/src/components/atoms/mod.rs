//! Shared UI atoms used across the shell and editor.

pub(crate) mod icon_button;
pub(crate) mod icons;

pub(crate) use icon_button::IconButton;
