//! Shared TUI components for the catalog browser.

pub mod detail_modal;
pub mod empty_state;
pub mod entry_list;
pub mod footer;
pub mod header;
pub mod modal_overlay;
pub mod page_input;
pub mod pagination;
pub mod search_box;
pub mod select;
pub mod sort_modal;

pub use detail_modal::{DetailModal, DetailModalProps};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use entry_list::{EntryList, EntryListProps};
pub use footer::{Footer, FooterProps, Shortcut, browser_shortcuts, modal_shortcuts, search_shortcuts, sort_shortcuts};
pub use header::{Header, HeaderProps};
pub use modal_overlay::{MODAL_BACKDROP, ModalOverlay, ModalOverlayProps};
pub use page_input::{PageInput, PageInputProps};
pub use pagination::{PaginationBar, PaginationBarProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use select::{Select, SelectProps, Selectable, options_for};
pub use sort_modal::{SortModal, SortModalProps};
