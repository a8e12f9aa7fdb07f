//! Decline command implementation

use clap::Args;
use serde::Serialize;

use sklon_core::process_record;

use crate::error::CliResult;

/// Arguments for the decline command
#[derive(Debug, Args)]
pub struct DeclineArgs {
    /// Request records in wire format, e.g. "5:ordinal:жр" or "12|рубль"
    #[arg(required = true, value_name = "RECORD")]
    pub records: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One result per line
    Text,
    /// JSON array of record/result pairs
    Json,
}

#[derive(Debug, Serialize)]
struct RecordResult<'a> {
    record: &'a str,
    result: String,
}

impl DeclineArgs {
    /// Execute the decline command
    pub fn execute(&self) -> CliResult<()> {
        match self.format {
            OutputFormat::Text => {
                for record in &self.records {
                    println!("{}", process_record(record));
                }
            }
            OutputFormat::Json => {
                let results: Vec<RecordResult<'_>> = self
                    .records
                    .iter()
                    .map(|record| RecordResult {
                        record,
                        result: process_record(record),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&results)?);
            }
        }
        Ok(())
    }
}
