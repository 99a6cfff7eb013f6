mod settings;

pub use settings::{init_app_config, load_country_aliases, load_visibility_rules, AppConfig};
