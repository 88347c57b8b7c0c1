//! App header bar component
//!
//! Displays the application title and the loaded entry count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps<'a> {
    /// Title (defaults to "Pokedex")
    pub title: Option<&'a str>,

    /// Total entry count, once the index is loaded
    pub entry_count: Option<usize>,

    /// Count after the current filter, when a query is active
    pub filtered_count: Option<usize>,
}

/// App header bar showing title and entry count
#[component]
pub fn Header<'a>(props: &HeaderProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let title = props.title.unwrap_or("Pokedex").to_string();

    let count_text = match (props.entry_count, props.filtered_count) {
        (Some(total), Some(filtered)) if filtered != total => {
            Some(format!("{filtered} of {total} entries"))
        }
        (Some(total), _) => Some(format!("{total} entries")),
        (None, _) => None,
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )
            #(count_text.map(|count| element! {
                Text(
                    content: count,
                    color: theme.text_dimmed,
                )
            }))
        }
    }
}
