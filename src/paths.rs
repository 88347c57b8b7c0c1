use std::path::PathBuf;

/// Returns the root directory for persisted pokedex state.
///
/// Resolution order:
/// 1. `POKEDEX_HOME` environment variable (if set)
/// 2. Platform data directory via `directories`
/// 3. `.pokedex` under the current working directory
pub fn pokedex_home() -> PathBuf {
    if let Ok(home) = std::env::var("POKEDEX_HOME") {
        return PathBuf::from(home);
    }
    if let Some(dirs) = directories::ProjectDirs::from("dev", "pokedex", "pokedex") {
        return dirs.data_dir().to_path_buf();
    }
    PathBuf::from(".pokedex")
}

/// Returns the path of the persisted favorites file.
pub fn favorites_path() -> PathBuf {
    pokedex_home().join("favorites.json")
}

/// Returns the path of the configuration file.
pub fn config_path() -> PathBuf {
    pokedex_home().join("config.yaml")
}
