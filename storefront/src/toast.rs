//! Toast notifications.
//!
//! The session reducer reports outcomes as [`Notification`]s; the
//! [`Toaster`] shows each as a toast that dismisses itself after
//! [`TOAST_DURATION`] or when its close button is clicked.

use ecofinds_commerce::notify::{Notification, NotificationKind, Notifier};
use leptos::prelude::*;
use std::time::Duration;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Reactive toast queue. `Copy`, so handlers capture it freely.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show `notification` and schedule its dismissal.
    pub fn push(&self, notification: Notification) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        tracing::debug!(toast = id, title = %notification.title, "Showing toast");
        self.toasts.update(|t| t.push(Toast { id, notification }));

        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), TOAST_DURATION);
        id
    }

    /// Remove a toast. Already-dismissed ids are ignored.
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}

fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "toast toast-success",
        NotificationKind::Info => "toast toast-info",
    }
}

/// Fixed-position stack of the active toasts.
#[component]
pub fn ToastViewport(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.notification.kind)>
                            <div class="toast-body">
                                <strong>{toast.notification.title}</strong>
                                <p>{toast.notification.description}</p>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
