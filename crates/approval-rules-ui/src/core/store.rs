//! App-wide yewdux store slices.
//!
//! # Design
//! - Only the notification queue is shared; rule form state stays local to the editor.
//! - Reducers are plain functions over the slice so they test without a DOM.
//! - Toast timers are tracked per id so a new toast never restarts older ones.

use crate::models::{Notice, Toast};
use yewdux::store::Store;

/// Maximum number of toasts kept on screen at once.
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Transient notifications.
    pub toasts: ToastQueue,
}

/// Ordered queue of visible toasts plus the id counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    /// Toasts in display order, oldest first.
    pub items: Vec<Toast>,
    /// Last id handed out.
    pub last_id: u64,
}

/// Append a toast, dropping the oldest entries beyond [`MAX_VISIBLE_TOASTS`].
///
/// Returns the id assigned to the new toast.
pub fn push_toast(queue: &mut ToastQueue, notice: Notice) -> u64 {
    let id = queue.last_id + 1;
    queue.last_id = id;
    queue.items.push(Toast {
        id,
        title: notice.title,
        description: notice.description,
        kind: notice.kind,
    });
    if queue.items.len() > MAX_VISIBLE_TOASTS {
        let drain = queue.items.len() - MAX_VISIBLE_TOASTS;
        queue.items.drain(0..drain);
    }
    id
}

/// Remove the toast with `id`; unknown ids are ignored.
pub fn dismiss_toast(queue: &mut ToastQueue, id: u64) {
    queue.items.retain(|toast| toast.id != id);
}

/// Auto-dismiss handles keyed by toast id.
///
/// Each id is armed once when it first shows up and its handle is dropped once
/// the toast leaves the queue, so later pushes never restart earlier timers.
#[derive(Debug)]
pub struct ToastTimers<H> {
    armed: Vec<(u64, H)>,
}

impl<H> Default for ToastTimers<H> {
    fn default() -> Self {
        Self { armed: Vec::new() }
    }
}

impl<H> ToastTimers<H> {
    /// Reconcile handles with the visible toasts, calling `arm` for new ids only.
    pub fn sync(&mut self, toasts: &[Toast], mut arm: impl FnMut(u64) -> H) {
        self.armed
            .retain(|(id, _)| toasts.iter().any(|toast| toast.id == *id));
        for toast in toasts {
            if !self.is_armed(toast.id) {
                self.armed.push((toast.id, arm(toast.id)));
            }
        }
    }

    /// Whether a handle is currently held for `id`.
    #[must_use]
    pub fn is_armed(&self, id: u64) -> bool {
        self.armed.iter().any(|(armed, _)| *armed == id)
    }
}

/// Dispatch handle for the shared store.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub(crate) fn app_dispatch() -> yewdux::prelude::Dispatch<AppStore> {
    yewdux::prelude::Dispatch::<AppStore>::new()
}
