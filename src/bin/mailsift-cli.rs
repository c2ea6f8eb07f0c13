#[path = "mailsift-cli/args.rs"]
mod args;
#[path = "mailsift-cli/output.rs"]
mod output;

use std::collections::HashSet;
use std::io::Read;

use anyhow::{Context, Result};
use regex::Regex;

use args::{Cli, Commands, ResolverKind};
use mailsift_lib::engine::build_http_client;
use mailsift_lib::{DnsLookup, DohResolver, EmailRecord, GravatarProbe, ValidationEngine};

type CliEngine = ValidationEngine<Box<dyn DnsLookup>, GravatarProbe>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let candidates = if cli.stdin {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("read stdin")?;
        split_candidates(&input)?
    } else if let Some(Commands::Validate { email }) = &cli.cmd {
        vec![email.clone()]
    } else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    };

    let engine = build_engine(&cli)?;
    let mut records: Vec<EmailRecord> = Vec::with_capacity(candidates.len());
    for candidate in &candidates {
        records.push(engine.validate_deep(candidate).await);
    }

    output::write_reports(&records, &cli)?;
    if cli.summary {
        output::write_summary(&records);
    }

    // exit codes: 0 OK, 2 at least one BAD, 1 fatal
    if output::any_bad(&records) {
        std::process::exit(2);
    }
    Ok(())
}

fn build_engine(cli: &Cli) -> Result<CliEngine> {
    let options = cli.engine_options();
    let client = build_http_client(&options).context("build HTTP client")?;

    let dns: Box<dyn DnsLookup> = match cli.resolver_kind()? {
        ResolverKind::Doh => Box::new(DohResolver::new(client.clone(), options.doh_endpoint.clone())),
        ResolverKind::System => system_resolver()?,
    };
    let avatar = GravatarProbe::new(client, options.avatar_endpoint);
    Ok(ValidationEngine::with_backends(dns, avatar))
}

#[cfg(feature = "with-system-dns")]
fn system_resolver() -> Result<Box<dyn DnsLookup>> {
    let resolver =
        mailsift_lib::SystemResolver::from_system_conf().context("load system resolver config")?;
    Ok(Box::new(resolver))
}

#[cfg(not(feature = "with-system-dns"))]
fn system_resolver() -> Result<Box<dyn DnsLookup>> {
    anyhow::bail!("--resolver system requires the 'with-system-dns' feature")
}

/// Split pasted input on whitespace and commas, dropping repeats while
/// keeping first-seen order.
fn split_candidates(input: &str) -> Result<Vec<String>> {
    let separators = Regex::new(r"[\s,]+").context("compile separator pattern")?;
    let mut seen = HashSet::new();
    Ok(separators
        .split(input)
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(token.to_string()))
        .map(str::to_string)
        .collect())
}

#[cfg(feature = "with-tracing")]
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "with-tracing"))]
fn init_tracing() {}
