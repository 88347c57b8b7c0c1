//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Search")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the main list view
pub fn browser_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("j/k", "Navigate"),
        Shortcut::new("h/l", "Page"),
        Shortcut::new("Enter", "Detail"),
        Shortcut::new("f", "Favorite"),
        Shortcut::new("/", "Search"),
        Shortcut::new("p", "Go to Page"),
        Shortcut::new("s", "Sort"),
        Shortcut::new("q", "Quit"),
    ]
}

/// Shortcuts while the search box or page input has focus
pub fn search_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Enter", "Back to List"),
        Shortcut::new("Esc", "Clear & Exit"),
    ]
}

/// Shortcuts while the detail modal is open
pub fn modal_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("f", "Favorite"),
        Shortcut::new("Esc", "Close"),
    ]
}

/// Shortcuts while the sort modal is open
pub fn sort_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Tab", "Switch Field"),
        Shortcut::new("←/→", "Change Value"),
        Shortcut::new("Enter", "Apply"),
        Shortcut::new("x", "Clear Sort"),
        Shortcut::new("Esc", "Cancel"),
    ]
}
