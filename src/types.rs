//! Core data model: catalog entries, entity detail, and the id
//! normalization boundary.
//!
//! Entry ids are derived from the detail locator exactly once, at
//! ingestion. Everything downstream works with plain integer ids.

use serde::{Deserialize, Serialize};

/// Lightweight list-row record from the species index.
///
/// Identity is `id`; entries are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEntry {
    pub id: u32,
    pub name: String,
    /// Fully-qualified locator for fetching the full detail record.
    pub detail_url: String,
}

impl PokemonEntry {
    pub fn new(id: u32, name: impl Into<String>, detail_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            detail_url: detail_url.into(),
        }
    }
}

/// Full record for a single entry, fetched on demand for the detail modal.
/// Not cached across opens; each open refetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Type slots in slot order.
    pub types: Vec<TypeSlot>,
    pub species: String,
    /// Height in decimeters, as delivered by the API.
    pub height_dm: u32,
    /// Weight in hectograms, as delivered by the API.
    pub weight_hg: u32,
    /// Base stats in API order.
    pub stats: Vec<StatLine>,
}

/// One type slot on an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSlot {
    pub name: String,
    pub color: TypeColor,
}

impl TypeSlot {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let color = TypeColor::for_type(&name);
        Self { name, color }
    }
}

/// A single base stat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub name: String,
    pub base: u32,
}

/// Coarse color category for a type name, used by both the TUI theme and
/// the colored CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Brown,
    Pink,
    Cyan,
    Gray,
    #[default]
    Neutral,
}

impl TypeColor {
    /// Map a PokeAPI type name to its display color category.
    /// Unknown types render neutrally.
    pub fn for_type(name: &str) -> Self {
        match name {
            "fire" | "fighting" => TypeColor::Red,
            "water" => TypeColor::Blue,
            "grass" | "bug" => TypeColor::Green,
            "electric" => TypeColor::Yellow,
            "poison" | "ghost" | "dragon" => TypeColor::Purple,
            "ground" | "rock" => TypeColor::Brown,
            "psychic" | "fairy" => TypeColor::Pink,
            "ice" | "flying" => TypeColor::Cyan,
            "steel" | "dark" => TypeColor::Gray,
            _ => TypeColor::Neutral,
        }
    }
}

/// Extract the numeric entry id from a detail locator.
///
/// Accepts both a plain integer (`"25"`) and a path-embedded integer
/// (`"https://pokeapi.co/api/v2/pokemon/25/"`). Ids are 1-based; zero and
/// non-numeric segments yield `None`.
pub fn id_from_detail_ref(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Ok(id) = s.parse::<u32>() {
        return (id >= 1).then_some(id);
    }
    s.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u32>().ok())
        .filter(|&id| id >= 1)
}

/// Format an API name for display: dash-separated words, each capitalized.
/// `"mr-mime"` becomes `"Mr Mime"`.
pub fn format_display_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
