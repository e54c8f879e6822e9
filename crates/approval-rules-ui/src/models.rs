//! Shared view models for the notification surface.

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
}

impl ToastKind {
    /// Modifier class for the toast container.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

/// Toast payload rendered by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Short headline.
    pub title: String,
    /// Body text under the headline.
    pub description: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Toast content before it is assigned an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Short headline.
    pub title: String,
    /// Body text under the headline.
    pub description: String,
    /// Severity classification.
    pub kind: ToastKind,
}
