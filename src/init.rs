use std::path::Path;

use crate::{
    importer::{self, ImportError},
    models::{Config, Vocabulary},
};

/// Vocabulary used when the config has neither a [vocabulary] table nor a seed file.
const DEFAULT_VOCABULARY: [(&str, &str); 7] = [
    ("Indonesia", "Halo! Aku dari Indonesia. Salam kenal semuanya!"),
    ("India", "नमस्ते! मैं भारत से हूँ।"),
    ("Ireland", "Hello! I'm from Ireland!"),
    ("Italy", "Ciao! Vengo dall'Italia!"),
    ("Japan", "こんにちは！日本から来ました！"),
    ("Germany", "Hallo! Ich komme aus Deutschland!"),
    ("France", "Bonjour! Je viens de France!"),
];

/// Initialize logger.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            use std::io::Write;
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(
                buf,
                "{} {}:{} {}{}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                level,
                record.args()
            )
        })
        .init();
}

/// Build the seed vocabulary from the config table and the optional CSV seed file.
pub fn init_vocabulary(config: &Config) -> Result<Vocabulary, ImportError> {
    let seed_file = &config.autocomplete.seed_file;

    if config.vocabulary.is_empty() && seed_file.is_empty() {
        log::info!("no vocabulary configured, using built-in defaults");
        return Ok(DEFAULT_VOCABULARY
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect());
    }

    let mut vocab = config.vocabulary.clone();
    if !seed_file.is_empty() {
        vocab.extend(importer::read_csv(Path::new(seed_file))?);
    }

    log::info!("loaded {} vocabulary entries", vocab.len());
    Ok(vocab)
}
