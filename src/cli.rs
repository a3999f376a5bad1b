use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "salam")]
#[command(about = "salam - Prefix-search autocomplete for labels and their greetings.")]
#[command(version = env!("VERSION"))]
pub struct Cli {
    /// Path to one or more config files (merged in order). Built-in defaults are
    /// used if none are given.
    #[arg(long, action = clap::ArgAction::Append)]
    pub config: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sample config file.
    NewConfig {
        /// Output path for config file.
        #[arg(short, long, default_value = "config.toml")]
        path: PathBuf,
    },

    /// Print the suggestions for a query and exit.
    Suggest {
        /// Query text (prefix).
        query: String,
    },

    /// Print the greeting for an exact label and exit.
    Lookup {
        /// Label, case-sensitive.
        label: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let cli =
            Cli::try_parse_from(["salam", "--config", "a.toml", "--config", "b.toml"]).unwrap();
        assert_eq!(
            cli.config,
            vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
        );
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["salam", "suggest", "ja"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Suggest { query }) if query == "ja"));

        let cli = Cli::try_parse_from(["salam", "new-config"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::NewConfig { path }) if path == PathBuf::from("config.toml")
        ));
    }
}
