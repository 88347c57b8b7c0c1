pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod error;
pub mod favorites;
pub mod modal;
pub mod paths;
pub mod presenter;
pub mod sort;
pub mod tui;
pub mod types;

pub use api::ApiClient;
pub use catalog::{CatalogState, Intent, LoadPhase, PAGE_SIZE};
pub use config::Config;
pub use error::{PokedexError, Result};
pub use favorites::FavoritesStore;
pub use modal::{DetailOverlay, OverlayPhase};
pub use sort::{SortDirection, SortField, SortSpec};
pub use types::{PokemonDetail, PokemonEntry};
