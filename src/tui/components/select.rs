//! Compact inline selector component for enum fields
//!
//! Cycles through a list of options with left/right arrows.
//! Displays as: Label: ◀ value ▶

use iocraft::prelude::*;

use crate::sort::{SortDirection, SortField};
use crate::tui::theme::theme;

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps<'a> {
    /// Label to display before the selector
    pub label: Option<&'a str>,
    /// List of options to choose from
    pub options: Vec<String>,
    /// Index of the currently selected option
    pub selected_index: usize,
    /// Whether the selector has focus
    pub has_focus: bool,
}

/// Compact inline selector component with arrow indicators
#[component]
pub fn Select<'a>(props: &SelectProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let label_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let arrow_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let current_value = props
        .options
        .get(props.selected_index)
        .cloned()
        .unwrap_or_default();

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.map(|label| element! {
                Text(
                    content: format!("{}:", label),
                    color: label_color,
                )
            }))
            Text(content: "◀", color: arrow_color)
            Text(content: current_value, color: theme.text)
            Text(content: "▶", color: arrow_color)
        }
    }
}

/// Helper trait for types that can be used with Select
pub trait Selectable: Sized + Clone + Copy + 'static {
    /// Get all possible values for this type
    fn all_values() -> Vec<Self>;
    /// Get the display string for this value
    fn display(&self) -> String;
    /// Get the index of this value in all_values
    fn index(&self) -> usize;
    /// Get the next value (wrapping)
    fn next(&self) -> Self {
        let values = Self::all_values();
        let next_idx = (self.index() + 1) % values.len();
        values[next_idx]
    }
    /// Get the previous value (wrapping)
    fn prev(&self) -> Self {
        let values = Self::all_values();
        let prev_idx = if self.index() == 0 {
            values.len() - 1
        } else {
            self.index() - 1
        };
        values[prev_idx]
    }
}

impl Selectable for SortField {
    fn all_values() -> Vec<Self> {
        vec![SortField::Id, SortField::Name]
    }

    fn display(&self) -> String {
        match self {
            SortField::Id => "ID".to_string(),
            SortField::Name => "Name".to_string(),
        }
    }

    fn index(&self) -> usize {
        match self {
            SortField::Id => 0,
            SortField::Name => 1,
        }
    }
}

impl Selectable for SortDirection {
    fn all_values() -> Vec<Self> {
        vec![SortDirection::Ascending, SortDirection::Descending]
    }

    fn display(&self) -> String {
        match self {
            SortDirection::Ascending => "Ascending".to_string(),
            SortDirection::Descending => "Descending".to_string(),
        }
    }

    fn index(&self) -> usize {
        match self {
            SortDirection::Ascending => 0,
            SortDirection::Descending => 1,
        }
    }
}

/// Get option strings for a selectable type
pub fn options_for<T: Selectable>() -> Vec<String> {
    T::all_values().iter().map(|v| v.display()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_selectable() {
        assert_eq!(SortField::Id.index(), 0);
        assert_eq!(SortField::Id.next(), SortField::Name);
        assert_eq!(SortField::Name.next(), SortField::Id);
        assert_eq!(SortField::Id.prev(), SortField::Name);
    }

    #[test]
    fn test_direction_selectable() {
        assert_eq!(SortDirection::Ascending.next(), SortDirection::Descending);
        assert_eq!(SortDirection::Ascending.prev(), SortDirection::Descending);
    }

    #[test]
    fn test_options_for() {
        assert_eq!(options_for::<SortField>(), vec!["ID", "Name"]);
        assert_eq!(options_for::<SortDirection>(), vec!["Ascending", "Descending"]);
    }
}
