use anyhow::{Context, Result, bail};

use crate::args::Cli;
use mailsift_lib::{EmailRecord, EmailStatus, ValidationSummary};

pub fn write_reports(records: &[EmailRecord], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(records),
        "json" => write_json(records, cli),
        "ndjson" => write_ndjson(records, cli),
        "csv" => write_csv(records, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

/// Counts go to stderr so machine-readable stdout stays parseable.
pub fn write_summary(records: &[EmailRecord]) {
    let summary = ValidationSummary::from_records(records);
    eprintln!("{}", summary_line(&summary));
}

pub fn any_bad(records: &[EmailRecord]) -> bool {
    records.iter().any(|r| r.status() == EmailStatus::Bad)
}

pub fn human_line(record: &EmailRecord) -> String {
    let tag = format!("[{}]", record.status());
    format!(
        "{tag:<8}{} :: {} (confidence {:.2})",
        record.email(),
        record.reason(),
        record.confidence()
    )
}

fn summary_line(summary: &ValidationSummary) -> String {
    format!(
        "total={} good={} risky={} bad={}",
        summary.total, summary.good, summary.risky, summary.bad
    )
}

fn write_human(records: &[EmailRecord]) -> Result<()> {
    for record in records {
        println!("{}", human_line(record));
    }
    Ok(())
}

fn write_json(records: &[EmailRecord], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(records)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

fn write_ndjson(records: &[EmailRecord], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for record in records {
            let line = serde_json::to_string(record)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for record in records {
            println!("{}", serde_json::to_string(record)?);
        }
    }
    Ok(())
}

#[cfg(feature = "with-csv")]
const CSV_HEADER: [&str; 11] = [
    "email",
    "status",
    "reason",
    "confidence",
    "syntax",
    "dns",
    "mx",
    "disposable",
    "social",
    "role",
    "blacklist",
];

#[cfg(feature = "with-csv")]
fn write_csv(records: &[EmailRecord], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(CSV_HEADER)?;
        for record in records {
            wtr.write_record(csv_record(record))?;
        }
        let data = wtr.into_inner().context("flush csv buffer")?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(CSV_HEADER)?;
        for record in records {
            wtr.write_record(csv_record(record))?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[EmailRecord], _: &Cli) -> Result<()> {
    bail!("format=csv requires the 'with-csv' feature")
}

#[cfg(feature = "with-csv")]
fn csv_record(record: &EmailRecord) -> Vec<String> {
    let checks = record.checks();
    vec![
        record.email().to_string(),
        record.status().to_string(),
        record.reason().to_string(),
        format!("{:.2}", record.confidence()),
        checks.syntax.to_string(),
        checks.dns.to_string(),
        checks.mx.to_string(),
        checks.disposable.to_string(),
        checks.social.to_string(),
        checks.role.to_string(),
        checks.blacklist.to_string(),
    ]
}

fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
