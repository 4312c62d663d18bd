// Wed Jan 15 2026 - Alex

use crate::config::OutputFormat;
use crate::memory::MemoryType;
use crate::output::SortKey;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linker-map-analyzer")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "GNU linker map parser and memory usage classifier", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export one or more map files as JSON
    Parse(ParseArgs),
    /// Print memory usage totals, optionally against a device profile
    Summary(SummaryArgs),
    /// List the memory configuration table
    Regions(RegionsArgs),
    /// List, filter and sort section entries
    Entries(EntriesArgs),
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output file, or directory when several maps are given
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub compact: bool,

    #[arg(long)]
    pub stats: bool,

    #[arg(long)]
    pub no_symbols: bool,
}

#[derive(Parser, Debug)]
pub struct SummaryArgs {
    pub file: PathBuf,

    /// JSON list of {id, flashBytes, ramBytes} device profiles
    #[arg(long)]
    pub profiles: Option<PathBuf>,

    #[arg(short, long)]
    pub device: Option<String>,

    #[arg(long)]
    pub flash: Option<u64>,

    #[arg(long)]
    pub ram: Option<u64>,

    #[arg(long, default_value = "10")]
    pub top: usize,

    #[arg(long)]
    pub markdown: bool,

    #[arg(long)]
    pub json: bool,

    /// Skip the region and section tables
    #[arg(long)]
    pub brief: bool,

    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RegionsArgs {
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct EntriesArgs {
    pub file: PathBuf,

    /// Root section to keep, e.g. `.text`; may be repeated
    #[arg(short, long)]
    pub section: Vec<String>,

    /// Memory type to keep (FLASH, RAM, ROM, DEBUG, UNKNOWN); may be repeated
    #[arg(short = 't', long = "type")]
    pub memory_type: Vec<MemoryType>,

    /// section, address, size, file or type
    #[arg(long)]
    pub sort: Option<SortKey>,

    #[arg(long)]
    pub desc: bool,

    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[arg(long)]
    pub symbols: bool,
}

impl ParseArgs {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(output) = &self.output {
            if self.files.len() > 1 && output.is_file() {
                return Err(format!(
                    "Output must be a directory when parsing several files: {:?}",
                    output
                ));
            }
        }
        Ok(())
    }
}

impl SummaryArgs {
    /// Profile and capacity rules are checked by `Config::validate`.
    pub fn validate(&self) -> Result<(), String> {
        if self.markdown && self.json {
            return Err("Cannot specify both --markdown and --json".to_string());
        }
        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.markdown {
            OutputFormat::Markdown
        } else {
            OutputFormat::Text
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn test_parse_entries_args() {
        let args = Args::try_parse_from([
            "linker-map-analyzer",
            "entries",
            "fw.map",
            "-s",
            ".text",
            "--type",
            "flash",
            "-t",
            "RAM",
            "--sort",
            "size",
            "--desc",
            "-n",
            "5",
        ])
        .unwrap();

        match args.command {
            Command::Entries(entries) => {
                assert_eq!(entries.section, vec![".text"]);
                assert_eq!(entries.memory_type, vec![MemoryType::Flash, MemoryType::Ram]);
                assert_eq!(entries.sort, Some(SortKey::Size));
                assert!(entries.desc);
                assert_eq!(entries.limit, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_memory_type() {
        let result = Args::try_parse_from(["linker-map-analyzer", "entries", "fw.map", "-t", "SRAM"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_requires_files() {
        assert!(Args::try_parse_from(["linker-map-analyzer", "parse"]).is_err());
    }

    pub(crate) fn summary_args(extra: &[&str]) -> SummaryArgs {
        let mut argv = vec!["linker-map-analyzer", "summary", "fw.map"];
        argv.extend_from_slice(extra);
        match Args::try_parse_from(argv).unwrap().command {
            Command::Summary(summary) => summary,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_summary_validate() {
        assert!(summary_args(&[]).validate().is_ok());
        assert!(summary_args(&["--markdown"]).validate().is_ok());
        assert!(summary_args(&["--markdown", "--json"]).validate().is_err());
    }

    #[test]
    fn test_summary_output_format() {
        assert_eq!(summary_args(&[]).output_format(), OutputFormat::Text);
        assert_eq!(summary_args(&["--markdown"]).output_format(), OutputFormat::Markdown);
        assert_eq!(summary_args(&["--json"]).output_format(), OutputFormat::Json);
        assert!(summary_args(&["--brief"]).brief);
    }
}
