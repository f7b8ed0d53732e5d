//! CLI definitions for task-api.
//!
//! The binary takes no subcommands: it loads configuration, applies these
//! overrides and serves until interrupted.

use crate::config::Config;
use crate::logging::LogTarget;
use clap::Parser;
use std::path::PathBuf;

/// Task tracking HTTP/JSON service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to database file (overrides config); `:memory:` for a throwaway store
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Address to listen on (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable permissive CORS
    #[arg(long)]
    pub cors: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: LogTarget,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(db_path) = &self.database {
            config.server.db_path = db_path.clone();
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.cors {
            config.http.cors = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = Cli::parse_from(["task-api"]);
        assert_eq!(cli.log, LogTarget::Stderr);

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.server.port, Config::default().server.port);
        assert!(!config.http.cors);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "task-api",
            "--database",
            ":memory:",
            "--host",
            "0.0.0.0",
            "--port",
            "9090",
            "--cors",
            "--log",
            "off",
        ]);

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.server.db_path, PathBuf::from(":memory:"));
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert!(config.http.cors);
        assert_eq!(cli.log, LogTarget::Off);
    }
}
