//! Entry detail modal.
//!
//! Centered modal populated from a fetched detail record. While the fetch
//! is in flight a loading row is shown instead of the record.

use iocraft::prelude::*;

use crate::presenter::DetailView;
use crate::tui::components::modal_overlay::ModalOverlay;
use crate::tui::theme::theme;

/// Props for the DetailModal component
#[derive(Default, Props)]
pub struct DetailModalProps {
    /// The loaded detail view; `None` while the fetch is in flight
    pub detail: Option<DetailView>,
}

/// Modal showing one entry's full record
#[component]
pub fn DetailModal(props: &DetailModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(view) = props.detail.clone() else {
        return element! {
            ModalOverlay(show_backdrop: true) {
                View(
                    width: 40,
                    background_color: theme.background,
                    border_style: BorderStyle::Double,
                    border_color: theme.border_focused,
                    padding: 1,
                    justify_content: JustifyContent::Center,
                ) {
                    Text(content: "Loading...", color: theme.loading)
                }
            }
        };
    };

    let star = if view.favorite { " ★" } else { "" };
    let title_line = format!("{} {}{star}", view.id_label, view.title);

    element! {
        ModalOverlay(show_backdrop: true) {
            View(
                width: 48,
                background_color: theme.background,
                border_style: BorderStyle::Double,
                border_color: theme.border_focused,
                padding: 1,
                flex_direction: FlexDirection::Column,
            ) {
                // Title row
                View(
                    width: 100pct,
                    padding_bottom: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                    flex_direction: FlexDirection::Row,
                ) {
                    Text(content: title_line, color: theme.id_color, weight: Weight::Bold)
                    View(flex_grow: 1.0)
                    Text(content: "Esc to close", color: theme.text_dimmed)
                }

                // Type chips
                View(flex_direction: FlexDirection::Row, gap: 1, margin_top: 1) {
                    Text(content: "Types:", color: theme.text_dimmed)
                    #(view.types.iter().map(|chip| {
                        element! {
                            Text(
                                content: chip.label.clone(),
                                color: theme.type_color(chip.color),
                                weight: Weight::Bold,
                            )
                        }
                    }))
                }

                View(flex_direction: FlexDirection::Row, gap: 1) {
                    Text(content: "Species:", color: theme.text_dimmed)
                    Text(content: view.species.clone(), color: theme.text)
                }
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    Text(content: "Height:", color: theme.text_dimmed)
                    Text(content: view.height.clone(), color: theme.text)
                }
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    Text(content: "Weight:", color: theme.text_dimmed)
                    Text(content: view.weight.clone(), color: theme.text)
                }

                // Stats block
                View(margin_top: 1, flex_direction: FlexDirection::Column) {
                    Text(content: "Stats", color: theme.text_dimmed)
                    #(view.stats.iter().map(|(name, base)| {
                        element! {
                            View(flex_direction: FlexDirection::Row) {
                                View(width: 18) {
                                    Text(content: name.clone(), color: theme.text)
                                }
                                Text(content: base.to_string(), color: theme.id_color)
                            }
                        }
                    }))
                }
            }
        }
    }
}
