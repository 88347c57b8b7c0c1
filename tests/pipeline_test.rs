//! End-to-end tests for the data-presentation pipeline: catalog state,
//! presenter view models, favorites persistence, and the detail overlay,
//! wired together the way the browser drives them.

use std::time::Duration;

use pokedex::catalog::{CatalogState, Intent};
use pokedex::debounce::Debouncer;
use pokedex::favorites::FavoritesStore;
use pokedex::modal::{DetailOverlay, OverlayPhase};
use pokedex::presenter;
use pokedex::sort::{SortDirection, SortField, SortSpec};
use pokedex::types::{PokemonDetail, PokemonEntry, TypeSlot};

fn entry(id: u32, name: &str) -> PokemonEntry {
    PokemonEntry::new(id, name, format!("https://pokeapi.co/api/v2/pokemon/{id}/"))
}

fn numbered_index(count: u32) -> Vec<PokemonEntry> {
    (1..=count).map(|id| entry(id, &format!("species-{id:03}"))).collect()
}

fn detail(id: u32, name: &str) -> PokemonDetail {
    PokemonDetail {
        id,
        name: name.to_string(),
        types: vec![TypeSlot::new("electric")],
        species: name.to_string(),
        height_dm: 4,
        weight_hg: 60,
        stats: Vec::new(),
    }
}

#[test]
fn test_page_clamp_then_slice() {
    // 45 entries at 20 per page: page 5 clamps to 3, showing the last 5.
    let mut catalog = CatalogState::new();
    catalog.begin_load();
    catalog.complete_load(numbered_index(45));

    catalog.apply(Intent::RequestPage(5));
    assert_eq!(catalog.page(), 3);

    let slice = catalog.visible_slice();
    assert_eq!(slice.len(), 5);
    assert_eq!(slice.first().map(|e| e.id), Some(41));
    assert_eq!(slice.last().map(|e| e.id), Some(45));

    let pagination = presenter::pagination(&catalog);
    assert_eq!(pagination.summary, "Page 3 of 3");
    assert!(pagination.prev_enabled);
    assert!(!pagination.next_enabled);
}

#[test]
fn test_query_filters_and_preserves_order() {
    let mut catalog = CatalogState::new();
    catalog.complete_load(vec![
        entry(4, "charmander"),
        entry(7, "squirtle"),
        entry(6, "charizard"),
    ]);

    catalog.apply(Intent::SetQuery("char".to_string()));
    let names: Vec<String> = catalog
        .visible_slice()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["charmander", "charizard"]);
}

#[test]
fn test_sort_query_page_compose_through_intents() {
    let mut catalog = CatalogState::new();
    catalog.complete_load(numbered_index(45));

    catalog.apply(Intent::SetSort(Some(SortSpec::new(
        SortField::Id,
        SortDirection::Descending,
    ))));
    catalog.apply(Intent::RequestPage(2));

    let slice = catalog.visible_slice();
    // Descending ids 45..1, second page starts at 25.
    assert_eq!(slice.first().map(|e| e.id), Some(25));
    assert_eq!(slice.last().map(|e| e.id), Some(6));
}

#[test]
fn test_name_sort_reversal_law() {
    let mut catalog = CatalogState::new();
    catalog.complete_load(vec![
        entry(1, "bulbasaur"),
        entry(25, "pikachu"),
        entry(4, "charmander"),
        entry(150, "mewtwo"),
    ]);

    catalog.set_sort(Some(SortSpec::new(SortField::Name, SortDirection::Ascending)));
    let ascending: Vec<u32> = catalog.visible_slice().iter().map(|e| e.id).collect();

    catalog.set_sort(Some(SortSpec::new(SortField::Name, SortDirection::Descending)));
    let descending: Vec<u32> = catalog.visible_slice().iter().map(|e| e.id).collect();

    let mut reversed = ascending;
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn test_favorite_toggle_round_trip_through_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.json");

    let mut catalog = CatalogState::new();
    catalog.complete_load(vec![entry(25, "pikachu"), entry(6, "charizard")]);
    let mut favorites = FavoritesStore::load_from(path.clone());

    presenter::dispatch(Intent::ToggleFavorite(25), &mut catalog, &mut favorites).unwrap();

    let cards = presenter::cards(&catalog, &favorites);
    assert!(cards[0].favorite);
    assert!(!cards[1].favorite);

    // A fresh load from disk sees the same membership.
    let reloaded = FavoritesStore::load_from(path.clone());
    assert!(reloaded.is_favorite(25));

    // Toggling twice restores the original state on disk too.
    presenter::dispatch(Intent::ToggleFavorite(25), &mut catalog, &mut favorites).unwrap();
    let reloaded = FavoritesStore::load_from(path);
    assert!(!reloaded.is_favorite(25));
}

#[test]
fn test_stale_detail_response_never_clobbers_current() {
    // Open 25, then 6 before 25's response arrives. 25's late response is
    // dropped; 6's lands.
    let mut overlay = DetailOverlay::new();
    overlay.open(25);
    overlay.open(6);

    assert!(!overlay.resolve(detail(25, "pikachu")));
    assert!(overlay.resolve(detail(6, "charizard")));

    match overlay.phase() {
        OverlayPhase::Ready(d) => assert_eq!(d.id, 6),
        other => panic!("unexpected phase {other:?}"),
    }

    // A response after close is also dropped.
    overlay.open(25);
    overlay.close();
    assert!(!overlay.resolve(detail(25, "pikachu")));
    assert_eq!(overlay.phase(), &OverlayPhase::Closed);
}

#[test]
fn test_failed_index_load_shows_error_state() {
    let mut catalog = CatalogState::new();
    catalog.begin_load();
    assert_eq!(presenter::list_status(&catalog), presenter::ListStatus::Loading);

    catalog.fail_load();
    assert_eq!(presenter::list_status(&catalog), presenter::ListStatus::LoadFailed);
    assert!(catalog.visible_slice().is_empty());
}

#[tokio::test]
async fn test_debounced_query_applies_last_value_only() {
    use std::sync::{Arc, Mutex};

    let applied: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&applied);
    let debouncer = Debouncer::new(Duration::from_millis(10), move |q: String| {
        sink.lock().unwrap().push(q);
    });

    // A typing burst: only the final value reaches the catalog.
    for q in ["c", "ch", "cha", "char"] {
        debouncer.call(q.to_string());
    }
    tokio::time::sleep(Duration::from_millis(60)).await;

    assert_eq!(*applied.lock().unwrap(), vec!["char".to_string()]);
}
