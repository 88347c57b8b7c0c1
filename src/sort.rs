//! Two-axis sort configuration: field and direction.
//!
//! The comparator is stable by construction: callers apply it with a stable
//! sort so equal keys keep their original insertion order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::PokedexError;
use crate::types::PokemonEntry;

/// Sortable entry field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Name,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A complete sort configuration. `None` at the call sites means insertion
/// order (no explicit sort applied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Compare two entries under this configuration.
    pub fn compare(&self, a: &PokemonEntry, b: &PokemonEntry) -> Ordering {
        let ordering = match self.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Id => write!(f, "id"),
            SortField::Name => write!(f, "name"),
        }
    }
}

impl FromStr for SortField {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            _ => Err(PokedexError::Other(format!(
                "invalid sort field '{}', expected 'id' or 'name'",
                s
            ))),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(PokedexError::Other(format!(
                "invalid sort direction '{}', expected 'ascending' or 'descending'",
                s
            ))),
        }
    }
}
