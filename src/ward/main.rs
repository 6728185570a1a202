use clap::Parser;
use log::{info, warn};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use ward::api::{ConfigAction, WardApi};
use ward::commands::import;
use ward::config::{default_config_dir, WardConfig};
use ward::error::{Result, WardError};
use ward::store::bst::PatientTree;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::menu::Session;
use cli::print::{config_line, print_config, print_messages};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config_dir = cli.config_dir.clone().or_else(default_config_dir);

    match &cli.command {
        Some(Commands::Config { key, value }) => {
            handle_config(config_dir, key.clone(), value.clone())
        }
        Some(Commands::Menu) | None => handle_menu(&cli, config_dir),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn handle_menu(cli: &Cli, config_dir: Option<PathBuf>) -> Result<()> {
    let config = match &config_dir {
        Some(dir) => WardConfig::load(dir)?,
        None => WardConfig::default(),
    };

    let mut api = WardApi::new(PatientTree::new());
    if let Some(dir) = config_dir {
        api = api.with_config_dir(dir);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let data_file = cli.data.clone().or(config.data_file.clone());
    if let Some(path) = data_file {
        match api.import_file(&path) {
            Ok(result) => {
                info!(
                    "loaded {} patients from {} ({} skipped)",
                    result.affected_patients.len(),
                    path.display(),
                    import::skipped(&result)
                );
                print_messages(&mut out, &result.messages)?;
            }
            Err(e) => {
                warn!("failed to load {}: {}", path.display(), e);
                writeln!(
                    out,
                    "Warning: could not load {} ({}), using demo data.",
                    path.display(),
                    e
                )?;
                api.seed_demo()?;
            }
        }
    } else if config.seed_demo_data && !cli.no_seed {
        let result = api.seed_demo()?;
        info!("seeded {} demo patients", result.affected_patients.len());
    }

    writeln!(out, "HOSPITAL PATIENT MANAGEMENT SYSTEM")?;

    let stdin = io::stdin();
    Session::new(&mut api, stdin.lock(), out).run()
}

fn handle_config(
    config_dir: Option<PathBuf>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let dir = config_dir
        .ok_or_else(|| WardError::Config("Could not determine config dir".to_string()))?;
    let api = WardApi::new(PatientTree::new()).with_config_dir(dir);

    let action = match (&key, value) {
        (Some(k), Some(v)) => ConfigAction::Set(k.clone(), v),
        _ => ConfigAction::ShowAll,
    };
    let result = api.config(action)?;

    let mut out = io::stdout().lock();
    if let Some(config) = &result.config {
        match key {
            Some(k) if result.messages.is_empty() => {
                let line = config_line(config, &k)
                    .ok_or_else(|| WardError::Config(format!("Unknown config key: {}", k)))?;
                writeln!(out, "{}", line)?;
            }
            Some(_) => {}
            None => print_config(&mut out, config)?,
        }
    }
    print_messages(&mut out, &result.messages)?;
    Ok(())
}
