//! Shared UI components.

pub(crate) mod atoms;
pub(crate) mod char_counter;
pub(crate) mod shell;
pub(crate) mod toast;
