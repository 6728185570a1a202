use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ward")]
#[command(version, about = "In-memory patient registry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// JSON file of patients to load at start-up
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Start with an empty registry instead of the demo patients
    #[arg(long)]
    pub no_seed: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Get or set configuration
    Config {
        /// Configuration key (seed-demo-data, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_menu() {
        let cli = Cli::try_parse_from(["ward"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_seed);
    }

    #[test]
    fn parses_startup_flags() {
        let cli = Cli::try_parse_from(["ward", "--no-seed", "--data", "p.json", "-v"]).unwrap();
        assert!(cli.no_seed);
        assert!(cli.verbose);
        assert_eq!(cli.data, Some(PathBuf::from("p.json")));
    }

    #[test]
    fn parses_config_set() {
        let cli = Cli::try_parse_from(["ward", "config", "seed-demo-data", "false"]).unwrap();
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("seed-demo-data"));
                assert_eq!(value.as_deref(), Some("false"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
