mod browse;
mod config;
mod favorites;
mod list;
mod show;

pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use favorites::{cmd_fav_clear, cmd_fav_ls, cmd_fav_toggle};
pub use list::cmd_ls;
pub use show::cmd_show;
