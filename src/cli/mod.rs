// CLI module for gemini-gateway
// Author: kelexine (https://github.com/kelexine)

use crate::config::{AppConfig, ClientMode, Platform};
use crate::console::DEFAULT_GATEWAY_URL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gemini-gateway - HTTP relay from a JSON prompt endpoint to the Gemini API
#[derive(Parser, Debug)]
#[command(name = "gemini-gateway", version, about, long_about = None)]
pub struct Args {
    /// Config file to load instead of ~/.gemini-gateway/config.toml
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Where the API key comes from: environment (cloud), .env file (local) or stdin (docker)
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Answer with simulated responses instead of calling the Gemini API
    #[arg(long)]
    pub simulate: bool,

    /// Log output format
    #[arg(long, value_parser = ["json", "pretty", "compact"])]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Chat with a running gateway from the terminal
    Client {
        /// Relay endpoint prompts are posted to
        #[arg(long, default_value = DEFAULT_GATEWAY_URL)]
        url: String,
    },
}

impl Args {
    /// Flags win over every other configuration source.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(platform) = self.platform {
            config.credentials.platform = platform;
        }
        if self.simulate {
            config.gemini.client = ClientMode::Stub;
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
    }
}
