use clap::{Parser, Subcommand};
use std::process::ExitCode;

use pokedex::commands::{
    cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show, cmd_fav_clear, cmd_fav_ls,
    cmd_fav_toggle, cmd_ls, cmd_show,
};
use pokedex::sort::{SortDirection, SortField, SortSpec};

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse the species catalog from your terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive fullscreen browser (default)
    #[command(visible_alias = "b")]
    Browse,

    /// Print one page of the catalog
    Ls {
        /// Filter by case-insensitive substring of the name
        #[arg(short, long)]
        query: Option<String>,

        /// Sort field: id or name
        #[arg(short, long, value_parser = parse_sort_field)]
        sort: Option<SortField>,

        /// Sort direction: ascending or descending
        #[arg(short, long, default_value = "ascending", value_parser = parse_sort_direction)]
        direction: SortDirection,

        /// Page number (1-based, clamped to range)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Only show favorites
        #[arg(long)]
        favorites: bool,
    },

    /// Show one entry's full detail record
    #[command(visible_alias = "s")]
    Show {
        /// Entry id or name
        target: String,
    },

    /// Manage the favorites set
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum FavAction {
    /// List favorites
    Ls,
    /// Toggle a favorite by id or name
    Toggle {
        /// Entry id or name
        target: String,
    },
    /// Remove all favorites
    Clear,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (api_base_url, request_timeout)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api_base_url, request_timeout)
        key: String,
    },
}

fn parse_sort_field(s: &str) -> Result<SortField, String> {
    s.parse().map_err(|_| "Invalid sort field. Must be one of: id, name".to_string())
}

fn parse_sort_direction(s: &str) -> Result<SortDirection, String> {
    s.parse()
        .map_err(|_| "Invalid direction. Must be one of: ascending, descending".to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => cmd_browse().await,

        Commands::Ls {
            query,
            sort,
            direction,
            page,
            favorites,
        } => {
            let sort_spec = sort.map(|field| SortSpec::new(field, direction));
            cmd_ls(query.as_deref(), sort_spec, page, favorites).await
        }

        Commands::Show { target } => cmd_show(&target).await,

        Commands::Fav { action } => match action {
            FavAction::Ls => cmd_fav_ls().await,
            FavAction::Toggle { target } => cmd_fav_toggle(&target).await,
            FavAction::Clear => cmd_fav_clear(),
        },

        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Get { key } => cmd_config_get(&key),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
