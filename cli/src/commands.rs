pub mod form;
pub mod lookup;

use std::time::Duration;

use clap::{Parser, Subcommand};
use cnpjr_common::config::{Config, REGISTRY_BASE_URL, REQUEST_TIMEOUT};

#[derive(Parser)]
#[command(name = "cnpjr")]
#[command(about = "Look up Brazilian companies by CNPJ in the public registry.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Upstream timeout for one lookup, in seconds
    #[arg(long, global = true, default_value_t = REQUEST_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Suppress decorative output (repeat for less)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a single CNPJ and print the report
    #[command(alias = "l")]
    Lookup {
        /// The company number, punctuation welcome (e.g. 11.222.333/0001-81)
        cnpj: String,
    },
    /// Interactive form: type a CNPJ, search, clear, repeat (the default)
    #[command(alias = "f")]
    Form,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            timeout: Duration::from_secs(self.timeout),
            base_url: REGISTRY_BASE_URL.to_string(),
            quiet: self.quiet,
        }
    }
}
