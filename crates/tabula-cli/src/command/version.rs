use crate::{prompt::DialoguerPrompt, Config, VersionSettings};
use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::{fs, path::PathBuf};
use tabula_core::version::{ChangeType, VersionManager};
use tabula_driver_aws::{Aws, Ssm, S3};

#[derive(Parser, Debug)]
pub struct VersionCommand {
    #[command(flatten)]
    settings: VersionSettings,

    #[command(subcommand)]
    subcommand: VersionSubcommand,
}

#[derive(Parser, Debug)]
enum VersionSubcommand {
    /// Print the current model version
    Current,

    /// Print the version a change would produce, without saving anything
    Next {
        /// Change type: 1 (major), 2 (minor) or 3 (patch)
        change: ChangeType,
    },

    /// Upload a model artifact as a new version
    Save(SaveCommand),
}

#[derive(Parser, Debug)]
pub struct SaveCommand {
    /// Path to the serialized model
    model: PathBuf,

    /// Change type; prompts interactively when omitted
    #[arg(short, long)]
    change: Option<ChangeType>,
}

impl VersionCommand {
    /// Version settings given on the command line
    pub fn settings(&self) -> &VersionSettings {
        &self.settings
    }

    pub(crate) async fn run(self, aws: &Aws, config: &Config) -> Result<()> {
        let manager = VersionManager::new(aws.ssm(), aws.s3(), config.version.to_version_config()?);

        match self.subcommand {
            VersionSubcommand::Current => {
                let version = manager.current_version().await?;
                println!("{version}");
            }
            VersionSubcommand::Next { change } => {
                let version = manager.new_version(change).await?;
                println!("{version}");
            }
            VersionSubcommand::Save(save) => save.run(&manager).await?,
        }

        Ok(())
    }
}

impl SaveCommand {
    async fn run(self, manager: &VersionManager<Ssm, S3>) -> Result<()> {
        let body = fs::read(&self.model)
            .with_context(|| format!("failed to read model {}", self.model.display()))?;

        match self.change {
            Some(change) => {
                let version = manager.release(change, body).await?;
                println!(
                    "  {} {}",
                    style("✓").green().bold(),
                    style(format!(
                        "Saved model version {version} to s3://{}/{}",
                        manager.config().bucket,
                        manager.config().artifact_key(&version)
                    ))
                    .dim()
                );
            }
            None => {
                println!();
                println!("  {}", style("Save Model Version").cyan().bold().underlined());
                println!();

                let mut prompt = DialoguerPrompt::new();
                manager.prompt_and_release(&mut prompt, body).await?;
            }
        }

        Ok(())
    }
}
