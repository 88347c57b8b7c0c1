//! Catalog browser command (`pokedex browse`)
//!
//! Launches the interactive fullscreen TUI.

use iocraft::prelude::*;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::tui::CatalogBrowser;

/// Launch the catalog browser TUI
pub async fn cmd_browse() -> Result<()> {
    let config = Config::load()?;
    let client = ApiClient::new(&config)?;

    element!(CatalogBrowser(client: Some(client)))
        .fullscreen()
        .await
        .map_err(|e| PokedexError::Other(format!("TUI error: {}", e)))
}
