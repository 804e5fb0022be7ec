mod command;
mod config;
mod prompt;
mod theme;

pub use command::{SchemaCommand, VersionCommand};
pub use config::*;
pub use prompt::DialoguerPrompt;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tabula_driver_aws::Aws;

/// Tabula CLI library for building custom command-line tools
#[derive(Debug, Default)]
pub struct TabulaCli {
    config: Config,
}

impl TabulaCli {
    /// Create a new TabulaCli instance with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new TabulaCli instance with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute CLI commands from command-line arguments
    pub async fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli).await
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub async fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::parse_from(args);
        self.run(cli).await
    }

    async fn run(&self, cli: Cli) -> Result<()> {
        let config = cli.resolve_config(&self.config)?;
        let aws = Aws::load(
            config.aws.region.as_deref(),
            config.aws.endpoint_url.as_deref(),
        )
        .await;

        match cli.command {
            Command::Schema(cmd) => cmd.run(&aws).await,
            Command::Version(cmd) => cmd.run(&aws, &config).await,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(about = "Tabula CLI - catalog schemas and model versions")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to `tabula.toml` when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// AWS region
    #[arg(long, global = true)]
    region: Option<String>,

    /// Custom AWS endpoint, e.g. http://localhost:4566
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Show the resolved schema of a catalog table
    Schema(SchemaCommand),

    /// Model version commands
    Version(VersionCommand),
}

impl Cli {
    /// Layers the configuration file and command-line flags over `base`.
    ///
    /// Flags win over the file, which wins over `base`.
    pub fn resolve_config(&self, base: &Config) -> Result<Config> {
        let mut config = base.clone();

        let path = match &self.config {
            Some(path) => Some(path.clone()),
            None => Some(PathBuf::from(Config::DEFAULT_FILE)).filter(|path| path.exists()),
        };

        if let Some(path) = path {
            config = config.merge(Config::load(&path)?);
        }

        if let Some(region) = &self.region {
            config = config.region(region);
        }

        if let Some(endpoint_url) = &self.endpoint_url {
            config = config.endpoint_url(endpoint_url);
        }

        if let Command::Version(cmd) = &self.command {
            config.version = config.version.merge(cmd.settings().clone());
        }

        Ok(config)
    }
}
