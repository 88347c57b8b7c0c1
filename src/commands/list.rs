//! `ls`: print one page of the catalog to stdout.

use owo_colors::OwoColorize;

use crate::api::ApiClient;
use crate::catalog::CatalogState;
use crate::config::Config;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::presenter;
use crate::sort::SortSpec;

/// List one page of the catalog, after optional filter and sort.
pub async fn cmd_ls(
    query: Option<&str>,
    sort: Option<SortSpec>,
    page: usize,
    favorites_only: bool,
) -> Result<()> {
    let config = Config::load()?;
    let client = ApiClient::new(&config)?;
    let favorites = FavoritesStore::load();

    let mut catalog = CatalogState::new();
    catalog.begin_load();
    let mut entries = client.fetch_index().await?;
    if favorites_only {
        entries.retain(|entry| favorites.is_favorite(entry.id));
    }
    catalog.complete_load(entries);

    catalog.set_sort(sort);
    if let Some(q) = query {
        catalog.set_query(q);
    }
    catalog.set_page(page);

    let cards = presenter::cards(&catalog, &favorites);
    if cards.is_empty() {
        println!("{}", "No matching entries".dimmed());
        return Ok(());
    }

    for card in &cards {
        let star = if card.favorite {
            "★".yellow().to_string()
        } else {
            " ".to_string()
        };
        println!("{star} {} {}", format!("#{:03}", card.id).cyan(), card.title);
    }

    let pagination = presenter::pagination(&catalog);
    println!(
        "{}",
        format!("{} ({} entries)", pagination.summary, catalog.filtered_count()).dimmed()
    );

    Ok(())
}
