//! Page-number input component
//!
//! A narrow text input for jumping to a page directly. The raw input is
//! debounced by the browser; out-of-range values clamp in the catalog.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the PageInput component
#[derive(Default, Props)]
pub struct PageInputProps {
    /// State for the raw page input value
    pub value: Option<State<String>>,
    /// Whether the input has focus
    pub has_focus: bool,
    /// Total pages, shown as a hint next to the input
    pub total_pages: usize,
}

/// Narrow page-number input with a page-count hint
#[component]
pub fn PageInput(props: &PageInputProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let Some(mut value) = props.value else {
        return element! {
            View(
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: border_color,
                height: 3,
            ) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    let hint = format!("/ {}", props.total_pages);

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
            width: 14,
        ) {
            View(width: 5) {
                TextInput(
                    value: value.to_string(),
                    has_focus: props.has_focus,
                    on_change: move |new_value| value.set(new_value),
                    color: theme.text,
                )
            }
            Text(content: hint, color: theme.text_dimmed)
        }
    }
}
