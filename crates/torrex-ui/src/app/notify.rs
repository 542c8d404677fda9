//! User notification channels.
//!
//! # Design
//! - Failures block on `window.alert`, as the backend messages are shown verbatim.
//! - Destructive actions ask through `window.confirm`.
//! - Successes are non-blocking toasts held in the store.

use crate::core::store::{app_dispatch, push_toast};
use crate::models::ToastKind;
use gloo::console;
use gloo::dialogs;

/// Report a failed action.
pub(crate) fn alert_failure(message: &str) {
    console::error!("request failed", message);
    dialogs::alert(message);
}

/// Report a client-side validation failure.
pub(crate) fn alert_invalid(message: &str) {
    dialogs::alert(message);
}

/// Ask for confirmation before a destructive action.
pub(crate) fn confirm(message: &str) -> bool {
    dialogs::confirm(message)
}

/// Show a success notice.
pub(crate) fn success(message: impl Into<String>) {
    let message = message.into();
    app_dispatch().reduce_mut(|store| {
        push_toast(store, ToastKind::Success, message.clone());
    });
}

/// Show an informational notice.
pub(crate) fn info(message: impl Into<String>) {
    let message = message.into();
    app_dispatch().reduce_mut(|store| {
        push_toast(store, ToastKind::Info, message.clone());
    });
}
