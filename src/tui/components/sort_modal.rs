//! Sort configuration modal.
//!
//! Two selectors (field and direction) edited as a draft; the catalog's
//! sort changes only when the draft is applied, in one atomic step.

use iocraft::prelude::*;

use crate::sort::{SortDirection, SortField};
use crate::tui::components::modal_overlay::ModalOverlay;
use crate::tui::components::select::{Select, Selectable, options_for};
use crate::tui::theme::theme;

/// Props for the SortModal component
#[derive(Default, Props)]
pub struct SortModalProps {
    pub field: SortField,
    pub direction: SortDirection,
    /// Which selector has focus: 0 = field, 1 = direction
    pub focused_row: usize,
}

/// Modal with field and direction selectors
#[component]
pub fn SortModal(props: &SortModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        ModalOverlay(show_backdrop: true) {
            View(
                width: 36,
                background_color: theme.background,
                border_style: BorderStyle::Double,
                border_color: theme.border_focused,
                padding: 1,
                flex_direction: FlexDirection::Column,
            ) {
                View(
                    width: 100pct,
                    padding_bottom: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: "Sort", color: theme.id_color, weight: Weight::Bold)
                }

                View(margin_top: 1) {
                    Select(
                        label: "Field",
                        options: options_for::<SortField>(),
                        selected_index: props.field.index(),
                        has_focus: props.focused_row == 0,
                    )
                }
                View(margin_top: 1) {
                    Select(
                        label: "Direction",
                        options: options_for::<SortDirection>(),
                        selected_index: props.direction.index(),
                        has_focus: props.focused_row == 1,
                    )
                }

                View(
                    width: 100pct,
                    margin_top: 1,
                    padding_top: 1,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: "Enter apply, x clear, Esc cancel", color: theme.text_dimmed)
                }
            }
        }
    }
}
