//! `pravokha config` - manage configuration.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::config::{CliConfig, DEFAULT_CONFIG_PATH};
use crate::context::Context;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the resolved configuration
    Show,

    /// Write a default pravokha.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs, ctx: &Context) -> Result<()> {
    match &args.action {
        ConfigAction::Show => {
            if ctx.output.is_json() {
                ctx.output.json(&ctx.config);
                return Ok(());
            }
            print!("{}", toml::to_string_pretty(&ctx.config)?);
            Ok(())
        }
        ConfigAction::Init { force } => {
            if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() && !force {
                bail!("{DEFAULT_CONFIG_PATH} already exists (pass --force to overwrite)");
            }
            CliConfig::default().save(DEFAULT_CONFIG_PATH)?;
            ctx.output
                .success(&format!("Wrote {DEFAULT_CONFIG_PATH}"));
            Ok(())
        }
    }
}
