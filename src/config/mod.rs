mod config;

pub use config::{get_api_url, load_config, save_config, Config};
