//! Small reusable building blocks.

pub(crate) mod empty_state;

pub(crate) use empty_state::EmptyState;
