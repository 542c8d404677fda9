//! Placeholder paragraph for empty lists.
//!
//! # Design
//! - Keep copy entirely prop-driven.
//! - Empty lists render this instead of an empty container.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <p class="empty-state">{props.title.clone()}</p>
    }
}
