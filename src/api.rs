//! Remote API client for the species index and detail records.
//!
//! The index is fetched with one oversized page request and the pager's
//! `next` links are still followed, so a server that caps page size cannot
//! truncate the catalog. Wire structs mirror the API payloads; conversion
//! into the core types happens at this boundary, including deriving entry
//! ids from detail locators.

use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::types::{id_from_detail_ref, PokemonDetail, PokemonEntry, StatLine, TypeSlot};

/// Requested index page size. Large enough to cover the full catalog in
/// one round trip under the default endpoint.
const INDEX_PAGE_LIMIT: u32 = 100_000;

/// HTTP client over the species API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

// Wire shapes.

#[derive(Debug, Deserialize)]
struct IndexPage {
    next: Option<String>,
    results: Vec<IndexItem>,
}

#[derive(Debug, Deserialize)]
struct IndexItem {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TypeSlotWire {
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedRef,
}

#[derive(Debug, Deserialize)]
struct StatWire {
    base_stat: u32,
    stat: NamedRef,
}

#[derive(Debug, Deserialize)]
struct DetailWire {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    species: NamedRef,
    types: Vec<TypeSlotWire>,
    stats: Vec<StatWire>,
}

impl From<DetailWire> for PokemonDetail {
    fn from(wire: DetailWire) -> Self {
        let mut types = wire.types;
        types.sort_by_key(|slot| slot.slot);
        PokemonDetail {
            id: wire.id,
            name: wire.name,
            types: types.into_iter().map(|slot| TypeSlot::new(slot.kind.name)).collect(),
            species: wire.species.name,
            height_dm: wire.height,
            weight_hg: wire.weight,
            stats: wire
                .stats
                .into_iter()
                .map(|line| StatLine {
                    name: line.stat.name,
                    base: line.base_stat,
                })
                .collect(),
        }
    }
}

/// Convert an index row, deriving the id from its locator. Rows with an
/// unparsable locator are skipped by the caller.
fn entry_from_item(item: IndexItem) -> Option<PokemonEntry> {
    let id = id_from_detail_ref(&item.url)?;
    Some(PokemonEntry::new(id, item.name, item.url))
}

fn transport_error(e: reqwest::Error) -> PokedexError {
    PokedexError::Network {
        status: e.status().map(|s| s.as_u16()),
        message: e.to_string(),
    }
}

impl ApiClient {
    /// Build a client from the configuration. Validates the base URL and
    /// applies the configured request timeout.
    pub fn new(config: &Config) -> Result<Self> {
        Url::parse(&config.api_base_url).map_err(|e| {
            PokedexError::Config(format!("invalid api_base_url '{}': {e}", config.api_base_url))
        })?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(transport_error)?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the complete species index.
    pub async fn fetch_index(&self) -> Result<Vec<PokemonEntry>> {
        let mut entries = Vec::new();
        let mut next = Some(format!("{}?limit={INDEX_PAGE_LIMIT}&offset=0", self.base_url));

        while let Some(url) = next {
            let page: IndexPage = self.get_json(&url).await?;
            next = page.next;
            for item in page.results {
                match entry_from_item(item) {
                    Some(entry) => entries.push(entry),
                    None => tracing::warn!("skipping index row with unparsable locator"),
                }
            }
        }

        tracing::debug!("index loaded: {} entries", entries.len());
        Ok(entries)
    }

    /// Fetch the detail record behind an entry's locator.
    pub async fn fetch_detail(&self, detail_url: &str) -> Result<PokemonDetail> {
        let wire: DetailWire = self.get_json(detail_url).await?;
        Ok(wire.into())
    }

    /// Fetch a detail record by id.
    pub async fn fetch_detail_by_id(&self, id: u32) -> Result<PokemonDetail> {
        self.fetch_detail(&format!("{}/{id}", self.base_url)).await
    }

    /// Fetch a detail record by name.
    pub async fn fetch_detail_by_name(&self, name: &str) -> Result<PokemonDetail> {
        self.fetch_detail(&format!("{}/{}", self.base_url, name.to_lowercase())).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {url}");
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Network {
                status: Some(status.as_u16()),
                message: format!("{url} returned {status}"),
            });
        }
        response.json().await.map_err(transport_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_FIXTURE: &str = r#"{
        "count": 3,
        "next": null,
        "previous": null,
        "results": [
            {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
            {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon/25/"},
            {"name": "broken", "url": "https://pokeapi.co/api/v2/pokemon/"}
        ]
    }"#;

    const DETAIL_FIXTURE: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"},
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
        ],
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}}
        ]
    }"#;

    #[test]
    fn test_index_page_parses_and_converts() {
        let page: IndexPage = serde_json::from_str(INDEX_FIXTURE).unwrap();
        assert!(page.next.is_none());

        let entries: Vec<PokemonEntry> =
            page.results.into_iter().filter_map(entry_from_item).collect();
        // The row without a numeric locator is dropped.
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[1].name, "pikachu");
        assert_eq!(entries[1].id, 25);
    }

    #[test]
    fn test_detail_parses_and_converts() {
        let wire: DetailWire = serde_json::from_str(DETAIL_FIXTURE).unwrap();
        let detail: PokemonDetail = wire.into();

        assert_eq!(detail.id, 25);
        assert_eq!(detail.name, "pikachu");
        assert_eq!(detail.height_dm, 4);
        assert_eq!(detail.weight_hg, 60);
        assert_eq!(detail.species, "pikachu");
        assert_eq!(detail.types.len(), 1);
        assert_eq!(detail.types[0].name, "electric");
        assert_eq!(detail.stats[0].name, "hp");
        assert_eq!(detail.stats[0].base, 35);
        assert_eq!(detail.stats[1].base, 55);
    }

    #[test]
    fn test_type_slots_sorted_by_slot() {
        let wire: DetailWire = serde_json::from_str(
            r#"{
                "id": 6, "name": "charizard", "height": 17, "weight": 905,
                "species": {"name": "charizard"},
                "types": [
                    {"slot": 2, "type": {"name": "flying"}},
                    {"slot": 1, "type": {"name": "fire"}}
                ],
                "stats": []
            }"#,
        )
        .unwrap();
        let detail: PokemonDetail = wire.into();
        assert_eq!(detail.types[0].name, "fire");
        assert_eq!(detail.types[1].name, "flying");
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let mut config = Config::default();
        config.api_base_url = "not a url".to_string();
        assert!(ApiClient::new(&config).is_err());
    }

    #[test]
    fn test_client_accepts_default_config() {
        let client = ApiClient::new(&Config::default()).unwrap();
        assert_eq!(client.base_url, "https://pokeapi.co/api/v2/pokemon");
    }
}
