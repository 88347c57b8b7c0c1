//! `fav`: manage the persisted favorites set.

use owo_colors::OwoColorize;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::types::format_display_name;

/// List all favorites with their names resolved from the index.
pub async fn cmd_fav_ls() -> Result<()> {
    let favorites = FavoritesStore::load();
    if favorites.is_empty() {
        println!("{}", "No favorites yet".dimmed());
        return Ok(());
    }

    let config = Config::load()?;
    let client = ApiClient::new(&config)?;
    let entries = client.fetch_index().await?;

    for id in favorites.ids() {
        let name = entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| format_display_name(&entry.name))
            .unwrap_or_else(|| "(unknown)".to_string());
        println!("{} {} {name}", "★".yellow(), format!("#{id:03}").cyan());
    }

    Ok(())
}

/// Toggle a favorite by id or name.
pub async fn cmd_fav_toggle(target: &str) -> Result<()> {
    let mut favorites = FavoritesStore::load();

    let id = match target.parse::<u32>() {
        Ok(id) => id,
        Err(_) => {
            let config = Config::load()?;
            let client = ApiClient::new(&config)?;
            client.fetch_detail_by_name(target).await?.id
        }
    };

    let now_favorite = favorites.toggle(id)?;
    if now_favorite {
        println!("{} #{id:03} added to favorites", "★".yellow());
    } else {
        println!("#{id:03} removed from favorites");
    }

    Ok(())
}

/// Remove all favorites.
pub fn cmd_fav_clear() -> Result<()> {
    let mut favorites = FavoritesStore::load();
    let count = favorites.len();
    favorites.clear()?;
    println!("Cleared {count} favorite(s)");
    Ok(())
}
