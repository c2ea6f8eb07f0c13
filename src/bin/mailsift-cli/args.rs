use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use mailsift_lib::EngineOptions;

#[derive(Parser)]
#[command(name = "mailsift-cli", version, about = "Classify email addresses as GOOD, RISKY or BAD")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// read addresses from stdin (whitespace or comma separated)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV per --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// print GOOD/RISKY/BAD counts after the report
    #[arg(long)]
    pub summary: bool,

    /// resolver: doh|system
    #[arg(long, default_value = "doh")]
    pub resolver: String,

    /// DNS-over-HTTPS JSON endpoint
    #[arg(long = "doh-endpoint")]
    pub doh_endpoint: Option<String>,

    /// avatar service base URL
    #[arg(long = "avatar-endpoint")]
    pub avatar_endpoint: Option<String>,

    /// per-request timeout in ms (0 = transport default)
    #[arg(long = "timeout", default_value_t = 0)]
    pub timeout_ms: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    Validate {
        /// address to classify
        email: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverKind {
    Doh,
    System,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn resolver_kind(&self) -> Result<ResolverKind> {
        resolver_from_str(&self.resolver)
    }

    pub fn engine_options(&self) -> EngineOptions {
        let defaults = EngineOptions::default();
        EngineOptions {
            doh_endpoint: self.doh_endpoint.clone().unwrap_or(defaults.doh_endpoint),
            avatar_endpoint: self
                .avatar_endpoint
                .clone()
                .unwrap_or(defaults.avatar_endpoint),
            timeout_ms: self.timeout_ms,
            user_agent: defaults.user_agent,
        }
    }
}

pub fn resolver_from_str(s: &str) -> Result<ResolverKind> {
    match s {
        "doh" => Ok(ResolverKind::Doh),
        "system" => Ok(ResolverKind::System),
        other => bail!("unknown --resolver '{other}', use: doh|system"),
    }
}
