use std::path::{Path, PathBuf};

use crate::models::{Config, MessagesConfig};

const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

/// Default listen address when none is configured.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8000";

/// Load and merge one or more config files.
pub fn load_all(paths: &[PathBuf]) -> Config {
    let mut config: Option<Config> = None;

    for path in paths {
        log::info!("loading config: {}", path.display());
        match read_file(path) {
            Ok(c) => {
                if let Some(ref mut existing) = config {
                    // Merge configs.
                    merge(existing, c);
                } else {
                    config = Some(c);
                }
            }
            Err(e) => {
                log::error!("error loading config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    config.unwrap_or_else(|| {
        log::error!("no config files specified");
        std::process::exit(1);
    })
}

/// Generate sample config file.
pub fn generate_sample(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        return Err("config file already exists".into());
    }
    std::fs::write(path, SAMPLE_CONFIG)?;
    Ok(())
}

/// Load configuration from a given TOML file.
fn read_file(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

/// Merge the given src config into the dest config struct.
fn merge(dest: &mut Config, src: Config) {
    if !src.app.address.is_empty() {
        dest.app.address = src.app.address;
    }

    if src.autocomplete.max_suggestions > 0 {
        dest.autocomplete.max_suggestions = src.autocomplete.max_suggestions;
    }
    if !src.autocomplete.seed_file.is_empty() {
        dest.autocomplete.seed_file = src.autocomplete.seed_file;
    }

    // Messages always deserialize with defaults, so only take the ones that were changed.
    let def = MessagesConfig::default();
    if src.messages.add_prompt != def.add_prompt {
        dest.messages.add_prompt = src.messages.add_prompt;
    }
    if src.messages.add_entry != def.add_entry {
        dest.messages.add_entry = src.messages.add_entry;
    }
    if src.messages.not_found != def.not_found {
        dest.messages.not_found = src.messages.not_found;
    }
    if src.messages.greeting_title != def.greeting_title {
        dest.messages.greeting_title = src.messages.greeting_title;
    }

    // Merge vocabulary. Later files win on duplicate labels.
    dest.vocabulary.extend(src.vocabulary);
}
