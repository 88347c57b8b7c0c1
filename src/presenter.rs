//! View-model construction and intent dispatch.
//!
//! Pure projections from catalog and favorites state into the records the
//! TUI and CLI render. No rendering concerns leak upward: unit conversion,
//! name casing, and pagination arithmetic all happen here.

use crate::catalog::{CatalogState, Intent, LoadPhase};
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::types::{format_display_name, PokemonDetail, TypeColor};

/// One list card: an entry plus its favorite marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: u32,
    pub title: String,
    pub favorite: bool,
}

/// Pagination controls for the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub page: usize,
    pub total_pages: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub summary: String,
}

/// What the list area should show besides cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    /// Index fetch in flight.
    Loading,
    /// Index fetch failed; nothing to show.
    LoadFailed,
    /// Index loaded but the query matched nothing.
    NoMatches,
    /// Cards available.
    Ready,
}

/// One colored type chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChip {
    pub label: String,
    pub color: TypeColor,
}

/// Fully formatted detail record, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: u32,
    pub title: String,
    pub id_label: String,
    pub types: Vec<TypeChip>,
    pub species: String,
    pub height: String,
    pub weight: String,
    pub stats: Vec<(String, u32)>,
    pub favorite: bool,
}

/// Cards for the current visible slice.
pub fn cards(catalog: &CatalogState, favorites: &FavoritesStore) -> Vec<CardView> {
    catalog
        .visible_slice()
        .into_iter()
        .map(|entry| CardView {
            id: entry.id,
            title: format_display_name(&entry.name),
            favorite: favorites.is_favorite(entry.id),
        })
        .collect()
}

/// Pagination state for the current filtered view.
pub fn pagination(catalog: &CatalogState) -> PaginationView {
    let page = catalog.page();
    let total_pages = catalog.total_pages();
    PaginationView {
        page,
        total_pages,
        prev_enabled: page > 1,
        next_enabled: page < total_pages,
        summary: format!("Page {page} of {total_pages}"),
    }
}

/// What the list area should show for the current load/filter state.
pub fn list_status(catalog: &CatalogState) -> ListStatus {
    match catalog.phase() {
        LoadPhase::Loading => ListStatus::Loading,
        LoadPhase::Empty if catalog.load_failed() => ListStatus::LoadFailed,
        LoadPhase::Empty => ListStatus::Loading,
        LoadPhase::Ready if catalog.filtered_count() == 0 => ListStatus::NoMatches,
        LoadPhase::Ready => ListStatus::Ready,
    }
}

/// Project a detail record into display form. Height arrives in decimeters
/// and weight in hectograms; both render in metric base units.
pub fn detail_view(detail: &PokemonDetail, favorites: &FavoritesStore) -> DetailView {
    DetailView {
        id: detail.id,
        title: format_display_name(&detail.name),
        id_label: format!("#{:03}", detail.id),
        types: detail
            .types
            .iter()
            .map(|slot| TypeChip {
                label: format_display_name(&slot.name),
                color: slot.color,
            })
            .collect(),
        species: format_display_name(&detail.species),
        height: format_height(detail.height_dm),
        weight: format_weight(detail.weight_hg),
        stats: detail
            .stats
            .iter()
            .map(|line| (format_display_name(&line.name), line.base))
            .collect(),
        favorite: favorites.is_favorite(detail.id),
    }
}

/// Decimeters to meters, one decimal place.
pub fn format_height(height_dm: u32) -> String {
    format!("{:.1} m", height_dm as f64 / 10.0)
}

/// Hectograms to kilograms, one decimal place.
pub fn format_weight(weight_hg: u32) -> String {
    format!("{:.1} kg", weight_hg as f64 / 10.0)
}

/// Route a user intent to the state it mutates. Favorite toggles go to the
/// persistent store; everything else mutates the catalog in memory.
pub fn dispatch(
    intent: Intent,
    catalog: &mut CatalogState,
    favorites: &mut FavoritesStore,
) -> Result<()> {
    match intent {
        Intent::ToggleFavorite(id) => {
            favorites.toggle(id)?;
            Ok(())
        }
        other => {
            catalog.apply(other);
            Ok(())
        }
    }
}
