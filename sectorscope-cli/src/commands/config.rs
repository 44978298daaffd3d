//! Configuration management CLI commands.
//!
//! Provides `config show`, `config init` and `config path`.

use std::path::Path;

use clap::Subcommand;
use sectorscope::config::ConfigFile;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file if none exists
    Init,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand against the config file at `path`.
pub fn run(command: ConfigCommands, path: &Path) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => run_show(path),
        ConfigCommands::Init => run_init(path),
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_show(path: &Path) -> Result<(), CliError> {
    let config = ConfigFile::load_from(path)?;
    if !path.exists() {
        println!("; {} does not exist, showing defaults", path.display());
    }
    print!("{}", render(&config));
    Ok(())
}

fn run_init(path: &Path) -> Result<(), CliError> {
    if ConfigFile::ensure_exists_at(path)? {
        println!("Created {}", path.display());
    } else {
        println!("{} already exists", path.display());
    }
    Ok(())
}

fn render(config: &ConfigFile) -> String {
    let opt = |p: &Option<std::path::PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    };

    let mut out = format!(
        "[reference]\ndirectory = {}\n\n[sector]\nfile = {}\n\n[positions]\nfile = {}\n\n\
         [colors]\ngeo = {}\nsid = {}\nstar = {}\n\n[logging]\ndirectory = {}\n",
        opt(&config.reference.directory),
        opt(&config.sector.file),
        opt(&config.positions.file),
        config.colors.geo,
        config.colors.sid,
        config.colors.star,
        config.logging.directory.display(),
    );
    if !config.colors.defined.is_empty() {
        out.push_str("\n[defined_colors]\n");
        for (name, rgb) in &config.colors.defined {
            out.push_str(&format!("{} = {}\n", name, rgb));
        }
    }
    out
}
