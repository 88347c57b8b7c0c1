//! Empty state component
//!
//! Displays a centered message while the index loads, after a failed load,
//! or when a query matches nothing.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Index fetch in flight
    #[default]
    Loading,
    /// Index fetch failed
    LoadFailed,
    /// Query matched no entries
    NoMatches,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Active search query (for NoMatches)
    pub search_query: Option<String>,
}

/// Centered empty state message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading", "Fetching the catalog index..."),
        EmptyStateKind::LoadFailed => (
            "!",
            "Load Failed",
            "Could not fetch the catalog index. Check your connection and restart.",
        ),
        EmptyStateKind::NoMatches => ("?", "No Results", "No entries match your search."),
    };

    let icon_color = if props.kind == EmptyStateKind::LoadFailed {
        theme.error
    } else {
        theme.text_dimmed
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: icon_color,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: icon_color, weight: Weight::Bold)
            }

            Text(content: title, color: theme.text, weight: Weight::Bold)

            View(margin_top: 1, max_width: 60) {
                Text(content: message, color: theme.text_dimmed)
            }

            #(if props.kind == EmptyStateKind::NoMatches && props.search_query.is_some() {
                let query = props.search_query.clone().unwrap_or_default();
                Some(element! {
                    View(margin_top: 1) {
                        Text(
                            content: format!("Search: \"{}\"", query),
                            color: theme.favorite,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}
