//! Live remaining-characters label for bounded text areas.

use crate::core::char_count::CharCount;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CharCounterProps {
    pub text: AttrValue,
    pub label: AttrValue,
}

#[function_component(CharCounter)]
pub(crate) fn char_counter(props: &CharCounterProps) -> Html {
    let count = CharCount::of(&props.text);
    html! {
        <small class="char-count">
            {props.label.clone()}{" "}
            <span style={format!("color: {}", count.color())}>{count.remaining}</span>
        </small>
    }
}
