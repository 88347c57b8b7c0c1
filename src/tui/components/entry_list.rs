//! Entry card list for the visible page.
//!
//! Renders one card per entry on the current page, with a favorite star
//! glyph and a selection indicator.

use iocraft::prelude::*;

use crate::presenter::CardView;
use crate::tui::theme::theme;

/// Props for the EntryList component
#[derive(Default, Props)]
pub struct EntryListProps {
    /// Cards for the visible slice
    pub cards: Vec<CardView>,
    /// Index of the selected card within the slice
    pub selected_index: usize,
    /// Whether the list pane has focus
    pub has_focus: bool,
}

/// One row per entry: selection indicator, id, name, favorite star
#[component]
pub fn EntryList(props: &EntryListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let has_focus = props.has_focus;
    let selected_index = props.selected_index;

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: if has_focus { theme.border_focused } else { theme.border },
            padding_left: 1,
            padding_right: 1,
            overflow: Overflow::Hidden,
        ) {
            #(props.cards.iter().enumerate().map(|(i, card)| {
                let is_selected = has_focus && i == selected_index;
                let indicator = if is_selected { ">" } else { " " };
                let text_color = if is_selected { theme.highlight_text } else { theme.text };
                let id_color = if is_selected { theme.highlight_text } else { theme.id_color };
                let star = if card.favorite { "★" } else { " " };

                element! {
                    View(
                        width: 100pct,
                        flex_direction: FlexDirection::Row,
                        gap: 1,
                        background_color: if is_selected { Some(theme.highlight) } else { None },
                    ) {
                        Text(content: indicator, color: text_color, weight: Weight::Bold)
                        Text(content: star, color: theme.favorite)
                        Text(
                            content: format!("#{:03}", card.id),
                            color: id_color,
                            weight: Weight::Bold,
                        )
                        Text(content: card.title.clone(), color: text_color)
                    }
                }
            }))
        }
    }
}
