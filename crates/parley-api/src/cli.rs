//! CLI definition for the `parley` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Conversational storefront assistant behind a small JSON API.
#[derive(Parser)]
#[command(name = "parley", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML config file. A missing file means built-in defaults.
    #[arg(long, global = true, env = "PARLEY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Detailed output (-v for debug, -vv for trace). Overrides --log-level.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Effective log filter after applying verbosity.
    pub fn log_filter(&self) -> String {
        match self.verbose {
            0 => self.log_level.to_lowercase(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default).
    Serve {
        /// Port to listen on. Overrides the config file and PORT.
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to. Overrides the config file.
        #[arg(long)]
        host: Option<String>,
    },

    /// Print the system prompt rendered from the active catalog.
    Prompt,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            port: None,
            host: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["parley"]).unwrap();
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Commands::Serve { port: None, host: None }
        ));
    }

    #[test]
    fn serve_flags_parse() {
        let cli = Cli::try_parse_from(["parley", "serve", "--port", "8080", "--host", "127.0.0.1"])
            .unwrap();
        match cli.command {
            Some(Commands::Serve { port, host }) => {
                assert_eq!(port, Some(8080));
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn verbosity_overrides_log_level() {
        let cli = Cli::try_parse_from(["parley", "--log-level", "WARN"]).unwrap();
        assert_eq!(cli.log_filter(), "warn");
        let cli = Cli::try_parse_from(["parley", "-v"]).unwrap();
        assert_eq!(cli.log_filter(), "debug");
        let cli = Cli::try_parse_from(["parley", "-vv"]).unwrap();
        assert_eq!(cli.log_filter(), "trace");
    }
}
