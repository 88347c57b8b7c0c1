//! `show`: fetch and print one entity's detail record.

use owo_colors::OwoColorize;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::presenter;
use crate::types::TypeColor;

/// Print the detail record for an entry, looked up by id or name.
pub async fn cmd_show(target: &str) -> Result<()> {
    let config = Config::load()?;
    let client = ApiClient::new(&config)?;
    let favorites = FavoritesStore::load();

    let detail = match target.parse::<u32>() {
        Ok(id) => client.fetch_detail_by_id(id).await?,
        Err(_) => client.fetch_detail_by_name(target).await?,
    };

    let view = presenter::detail_view(&detail, &favorites);

    let star = if view.favorite { " ★".yellow().to_string() } else { String::new() };
    println!("{} {}{star}", view.id_label.cyan(), view.title.bold());

    let types = view
        .types
        .iter()
        .map(|chip| colorize_type(&chip.label, chip.color))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  {} {types}", format!("{:<8}", "Types").dimmed());
    println!("  {} {}", format!("{:<8}", "Species").dimmed(), view.species);
    println!("  {} {}", format!("{:<8}", "Height").dimmed(), view.height);
    println!("  {} {}", format!("{:<8}", "Weight").dimmed(), view.weight);

    println!("  {}", "Stats".dimmed());
    for (name, base) in &view.stats {
        println!("    {name:<16} {base}");
    }

    Ok(())
}

fn colorize_type(label: &str, color: TypeColor) -> String {
    match color {
        TypeColor::Red => label.red().to_string(),
        TypeColor::Blue => label.blue().to_string(),
        TypeColor::Green => label.green().to_string(),
        TypeColor::Yellow => label.yellow().to_string(),
        TypeColor::Purple => label.purple().to_string(),
        TypeColor::Brown => label.red().dimmed().to_string(),
        TypeColor::Pink => label.bright_magenta().to_string(),
        TypeColor::Cyan => label.cyan().to_string(),
        TypeColor::Gray => label.bright_black().to_string(),
        TypeColor::Neutral => label.to_string(),
    }
}
