mod autocomplete;
mod cli;
mod config;
mod handlers;
mod http;
mod importer;
mod init;
mod models;
mod trie;

use std::sync::Arc;

use clap::Parser;
use tokio::sync::Mutex;

use autocomplete::Autocomplete;
use cli::Commands;
use handlers::Ctx;
use models::{Config, QueryResult};

#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() {
    init::init_logger();

    let cli = cli::Cli::parse();

    // Generate a new config file. Needs no config or vocabulary.
    if let Some(Commands::NewConfig { path }) = &cli.command {
        match config::generate_sample(path) {
            Ok(_) => {
                log::info!("config file generated: {}", path.display());
            }
            Err(e) => {
                log::error!("error generating config: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Load config.
    let config = if cli.config.is_empty() {
        log::info!("no config files specified, using defaults");
        Config::default()
    } else {
        config::load_all(&cli.config)
    };

    // Seed the vocabulary and build the index.
    let vocab = match init::init_vocabulary(&config) {
        Ok(v) => v,
        Err(e) => {
            log::error!("error loading vocabulary: {}", e);
            std::process::exit(1);
        }
    };
    let ac = Autocomplete::new(vocab, config.autocomplete.max_suggestions);

    // One-shot commands.
    match cli.command {
        Some(Commands::Suggest { query }) => {
            print_suggestions(&ac, &config, &query);
            return;
        }

        Some(Commands::Lookup { label }) => {
            let label = label.trim();
            match ac.lookup(label) {
                Ok(greeting) => {
                    println!("{}", config.messages.greeting_title(label));
                    println!("{}", greeting);
                }
                Err(e) => {
                    log::debug!("{}", e);
                    println!("{}", config.messages.not_found);
                    std::process::exit(1);
                }
            }
            return;
        }

        Some(Commands::NewConfig { .. }) | None => {}
    }

    let addr = if config.app.address.is_empty() {
        config::DEFAULT_ADDRESS.to_string()
    } else {
        config.app.address.clone()
    };

    // Setup the global app context used in HTTP handlers.
    let ctx = Arc::new(Ctx {
        autocomplete: Mutex::new(ac),
        messages: config.messages,
        version: env!("VERSION").to_string(),
    });

    // Start the HTTP server.
    let routes = http::init_handlers(ctx);

    log::info!("starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("error listening on {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, routes).await {
        log::error!("server error: {}", e);
        std::process::exit(1);
    }
}

/// Print suggestions for a query with the matched part in [brackets], or the
/// "add new entry" text if nothing matched.
fn print_suggestions(ac: &Autocomplete, config: &Config, query: &str) {
    match ac.query(query) {
        QueryResult::Empty => {}
        QueryResult::Matches { suggestions } => {
            for s in suggestions {
                println!("{}", s.marked("[", "]"));
            }
        }
        QueryResult::Create { name } => {
            println!("{}", config.messages.add_entry(&name));
        }
    }
}
