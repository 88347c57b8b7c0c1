//! Interactive catalog browser TUI.
//!
//! Built around a single fullscreen component (`CatalogBrowser`) with
//! keyboard-driven navigation, debounced search and page input, and modal
//! overlays for entry detail and sort configuration.

pub mod browser;
pub mod components;
pub mod handlers;
pub mod theme;

pub use browser::CatalogBrowser;
pub use theme::{Theme, theme};
