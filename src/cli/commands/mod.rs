//! CLI command definitions and dispatch.
//!
//! Each group of subcommands lives in its own submodule:
//! - `catalog`: listing and exporting catalog contents

mod catalog;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use catalog::{cmd_export, cmd_feed, cmd_playlists, cmd_tracks};

use crate::catalog::CatalogSource;
use crate::config::Config;

/// TuneSphere CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog file (.json or .toml) to use instead of the built-in data
    #[arg(short, long, global = true, env = "TUNESPHERE_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Catalog source: the flag wins over the config file.
    pub fn catalog_source(&self, config: &Config) -> CatalogSource {
        CatalogSource::from_path(self.catalog.clone().or_else(|| config.catalog.path.clone()))
    }
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// List all tracks in the catalog
    Tracks,
    /// List playlists with their resolved track counts
    Playlists,
    /// Show the social feed
    Feed,
    /// Write the catalog to a .json or .toml file
    ExportCatalog {
        /// Destination file; format is chosen by extension
        path: PathBuf,
    },
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command was specified
/// (meaning the GUI should launch).
pub fn run_command(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    let rt = Runtime::new()?;
    let source = cli.catalog_source(config);

    match command {
        Commands::Tracks => cmd_tracks(&rt, source)?,
        Commands::Playlists => cmd_playlists(&rt, source)?,
        Commands::Feed => cmd_feed(&rt, source)?,
        Commands::ExportCatalog { path } => cmd_export(&rt, source, path)?,
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_launches_gui() {
        let cli = Cli::try_parse_from(["tunesphere"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!run_command(&cli, &Config::default()).unwrap());
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::try_parse_from(["tunesphere", "export-catalog", "out.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::ExportCatalog { ref path }) if path == &PathBuf::from("out.toml")
        ));
    }

    #[test]
    fn test_catalog_flag_overrides_config() {
        let mut config = Config::default();
        config.catalog.path = Some(PathBuf::from("from-config.json"));

        let cli = Cli::try_parse_from(["tunesphere", "tracks", "--catalog", "flag.toml"]).unwrap();
        assert_eq!(
            cli.catalog_source(&config),
            CatalogSource::File(PathBuf::from("flag.toml"))
        );
    }

    #[test]
    fn test_config_catalog_used_without_flag() {
        let mut config = Config::default();
        config.catalog.path = Some(PathBuf::from("from-config.json"));
        let cli = Cli {
            catalog: None,
            command: Some(Commands::Feed),
        };
        assert_eq!(
            cli.catalog_source(&config),
            CatalogSource::File(PathBuf::from("from-config.json"))
        );
        assert_eq!(
            Cli {
                catalog: None,
                command: None
            }
            .catalog_source(&Config::default()),
            CatalogSource::Builtin
        );
    }
}
