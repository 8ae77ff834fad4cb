//! Output formatting for different formats.

use clap::ValueEnum;
use colored::Colorize;
use cpanel_core::ZoneRecord;
use cpanel_dns01::{ChallengeRequest, Outcome};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Machine-readable summary of one perform or cleanup
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ChallengeReport<'a> {
    pub action: &'static str,
    pub domain: &'a str,
    pub zone: &'a str,
    pub record: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl<'a> ChallengeReport<'a> {
    pub fn new(request: &'a ChallengeRequest, outcome: Outcome) -> Self {
        let (action, line) = match outcome {
            Outcome::Created => ("created", None),
            Outcome::Updated { line } => ("updated", Some(line)),
            Outcome::Unchanged { line } => ("unchanged", Some(line)),
            Outcome::Removed { line } => ("removed", Some(line)),
            Outcome::AlreadyAbsent => ("absent", None),
        };

        Self {
            action,
            domain: &request.domain,
            zone: request.zone(),
            record: &request.validation_name,
            line,
        }
    }
}

/// Print the result of a perform or cleanup
pub fn print_challenge(
    format: OutputFormat,
    request: &ChallengeRequest,
    outcome: Outcome,
) -> anyhow::Result<()> {
    let report = ChallengeReport::new(request, outcome);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Pretty => {
            let action = match outcome {
                Outcome::AlreadyAbsent | Outcome::Unchanged { .. } => report.action.yellow(),
                _ => report.action.green(),
            };
            let line = report.line.map(|l| format!(" (line {l})")).unwrap_or_default();
            println!(
                "{} {} in {}{}",
                action.bold(),
                report.record.cyan(),
                report.zone,
                line.dimmed()
            );
        }
    }

    Ok(())
}

/// Print zone records
pub fn print_records(
    format: OutputFormat,
    records: &[ZoneRecord],
    show_ttl: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        OutputFormat::Pretty => {
            if records.is_empty() {
                println!("{}", "No records found".dimmed());
                return Ok(());
            }

            for record in records {
                let ttl = if show_ttl {
                    format!("{:>6} ", record.ttl)
                } else {
                    String::new()
                };
                println!(
                    "{:>5}  {}{:6} {:40} {}",
                    record.line.to_string().dimmed(),
                    ttl,
                    record.record_type.yellow(),
                    record.name,
                    record.data
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_challenge_report() {
        let request = ChallengeRequest::acme("*.www.example.com", "token");

        let report = ChallengeReport::new(&request, Outcome::Updated { line: 21 });
        assert_eq!(report.action, "updated");
        assert_eq!(report.zone, "example.com");
        assert_eq!(report.record, "_acme-challenge.www.example.com");

        let json = serde_json::to_value(ChallengeReport::new(&request, Outcome::Created)).unwrap();
        assert_eq!(json["action"], "created");
        assert!(json.get("line").is_none());
    }
}
