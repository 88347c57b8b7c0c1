//! Pagination indicator bar.
//!
//! Shows the page summary with prev/next hints, hidden at the respective
//! boundary.

use iocraft::prelude::*;

use crate::presenter::PaginationView;
use crate::tui::theme::theme;

/// Props for the PaginationBar component
#[derive(Default, Props)]
pub struct PaginationBarProps {
    pub view: Option<PaginationView>,
}

/// Single-row pagination bar: `◀ prev   Page 2 of 3   next ▶`
#[component]
pub fn PaginationBar(props: &PaginationBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(view) = props.view.clone() else {
        return element! {
            View(height: 1)
        };
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::Center,
            gap: 3,
        ) {
            // Prev hint hidden on the first page
            #(view.prev_enabled.then(|| element! {
                Text(content: "◀ h", color: theme.text_dimmed)
            }))
            Text(content: view.summary.clone(), color: theme.text)
            // Next hint hidden on the last page
            #(view.next_enabled.then(|| element! {
                Text(content: "l ▶", color: theme.text_dimmed)
            }))
        }
    }
}
