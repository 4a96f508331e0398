mod load_config;

pub use load_config::{DEFAULT_CONFIG, load_config, resolve_config_path};
