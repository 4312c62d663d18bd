// Wed Jan 15 2026 - Alex

use super::args::{Args, Command, EntriesArgs, ParseArgs, RegionsArgs, SummaryArgs};
use crate::config::{Config, OutputFormat};
use crate::map::{self, MapFile};
use crate::output::{
    DeviceUsage, EntryQuery, JsonSerializer, MapStatistics, ReportFormat, ReportGenerator, SortOrder,
};
use crate::ui::table::{entries_table, regions_table};
use crate::ui::{print_error, print_info, print_success};
use anyhow::Context;
use colored::Colorize;
use log::debug;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct CommandHandler {
    use_color: bool,
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            use_color: true,
            quiet: false,
        }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args)?;

        self.quiet = args.quiet;
        if args.no_color {
            self.use_color = false;
            colored::control::set_override(false);
        }

        match args.command {
            Command::Parse(parse_args) => self.handle_parse(parse_args),
            Command::Summary(summary_args) => self.handle_summary(summary_args),
            Command::Regions(regions_args) => self.handle_regions(regions_args),
            Command::Entries(entries_args) => self.handle_entries(entries_args),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Warn,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
            .context("failed to initialise logger")?;

        Ok(())
    }

    fn load(&self, path: &Path) -> anyhow::Result<MapFile> {
        let start = Instant::now();
        let map = map::parse_file(path)?;
        debug!("parsed {} in {:?}", path.display(), start.elapsed());
        Ok(map)
    }

    fn handle_parse(&self, args: ParseArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let serializer = JsonSerializer::new()
            .with_pretty_print(!args.compact)
            .with_statistics(args.stats)
            .with_symbols(!args.no_symbols);

        let several = args.files.len() > 1;
        if several {
            if let Some(dir) = &args.output {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
        }

        let mut failures = 0;
        for (path, result) in map::parse_files(&args.files) {
            let map = match result {
                Ok(map) => map,
                Err(e) => {
                    print_error(&e.to_string());
                    failures += 1;
                    continue;
                }
            };

            match output_path(args.output.as_deref(), &path, several) {
                Some(target) => {
                    serializer.serialize_to_file(&map, None, &target)?;
                    if !self.quiet {
                        print_success(&format!(
                            "{} -> {} ({} entries)",
                            path.display(),
                            target.display(),
                            map.entries().len()
                        ));
                    }
                }
                None => println!("{}", serializer.serialize(&map, None)?),
            }
        }

        if failures > 0 {
            anyhow::bail!("{} of {} map files could not be read", failures, args.files.len());
        }
        Ok(())
    }

    fn handle_summary(&self, args: SummaryArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let config = summary_config(&args, self.use_color);
        let profile = config.resolve_profile()?;
        let map = self.load(&args.file)?;
        let stats = MapStatistics::collect(&map, config.top_entries);
        let usage = profile.as_ref().map(|p| DeviceUsage::compute(&stats, p));

        let report_format = match config.output_format {
            OutputFormat::Json => {
                let serializer = JsonSerializer::new()
                    .with_pretty_print(config.pretty_json)
                    .with_symbols(false)
                    .with_statistics(true)
                    .with_top_entries(config.top_entries);
                match &args.output {
                    Some(path) => {
                        serializer.serialize_to_file(&map, usage.as_ref(), path)?;
                        self.report_written(path);
                    }
                    None => println!("{}", serializer.serialize(&map, usage.as_ref())?),
                }
                return Ok(());
            }
            OutputFormat::Markdown => ReportFormat::Markdown,
            OutputFormat::Text => ReportFormat::Text,
        };

        let generator = ReportGenerator::new(report_format)
            .with_regions(!args.brief)
            .with_sections(!args.brief);

        match &args.output {
            Some(path) => {
                generator
                    .generate_to_file(&map, &stats, usage.as_ref(), path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                self.report_written(path);
            }
            None => print!("{}", generator.generate(&map, &stats, usage.as_ref())),
        }
        Ok(())
    }

    fn report_written(&self, path: &Path) {
        if !self.quiet {
            print_success(&format!("Report written to: {}", path.display()));
        }
    }

    fn handle_regions(&self, args: RegionsArgs) -> anyhow::Result<()> {
        let map = self.load(&args.file)?;

        if map.regions().is_empty() {
            if !self.quiet {
                print_info("No Memory Configuration table found");
            }
            return Ok(());
        }

        println!("{}", regions_table(&map, self.use_color));
        Ok(())
    }

    fn handle_entries(&self, args: EntriesArgs) -> anyhow::Result<()> {
        let map = self.load(&args.file)?;

        let order = if args.desc {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };

        let mut query = EntryQuery::new()
            .with_sections(args.section.iter().cloned())
            .with_memory_types(args.memory_type.iter().copied());
        if let Some(key) = args.sort {
            query = query.sort_by(key, order);
        }
        if let Some(limit) = args.limit {
            query = query.with_limit(limit);
        }

        let entries = query.run(&map);
        println!("{}", entries_table(&map, &entries, self.use_color));

        if args.symbols {
            for entry in &entries {
                if entry.symbols().is_empty() {
                    continue;
                }
                println!("{}", entry.section_full().yellow().bold());
                for symbol in entry.symbols() {
                    println!("  {} {}", symbol.address, symbol.symbol.cyan());
                }
            }
        }

        if !self.quiet {
            print_info(&format!("{} of {} entries", entries.len(), map.entries().len()));
        }
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps `summary` flags onto a `Config`; `Config::validate` decides whether
/// the combination is usable.
fn summary_config(args: &SummaryArgs, use_color: bool) -> Config {
    let mut config = Config::new()
        .with_output_format(args.output_format())
        .with_top_entries(args.top)
        .with_color(use_color);
    config.profiles_file = args.profiles.clone();
    config.device = args.device.clone();
    config.custom_flash_bytes = args.flash;
    config.custom_ram_bytes = args.ram;
    config
}

/// Where a parsed map's JSON goes: `None` means stdout.
fn output_path(output: Option<&Path>, input: &Path, several: bool) -> Option<PathBuf> {
    let output = output?;
    if !several {
        return Some(output.to_path_buf());
    }

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "map".to_string());
    Some(output.join(format!("{}.json", stem)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::cli::args::tests::summary_args;

    #[test]
    fn test_summary_config_validation() {
        let config = |extra: &[&str]| summary_config(&summary_args(extra), false);

        assert!(config(&[]).validate().is_ok());
        assert!(config(&["--flash", "65536", "--ram", "20480"]).validate().is_ok());
        assert!(config(&["--profiles", "d.json", "--device", "F103"]).validate().is_ok());
        assert!(config(&["--flash", "65536"]).validate().is_err());
        assert!(config(&["--ram", "20480"]).validate().is_err());
        assert!(config(&["--device", "F103"]).validate().is_err());
        assert!(config(&["--profiles", "d.json", "--device", "F103", "--ram", "1"])
            .validate()
            .is_err());
        assert!(config(&["--top", "0"]).validate().is_err());
    }

    #[test]
    fn test_summary_config_carries_format_and_capacity() {
        let config = summary_config(&summary_args(&["--json", "--top", "3"]), false);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.top_entries, 3);
        assert!(!config.use_color);

        let profile = summary_config(&summary_args(&["--flash", "1024", "--ram", "512"]), true)
            .resolve_profile()
            .unwrap();
        assert_eq!(profile.map(|p| (p.flash_bytes, p.ram_bytes)), Some((1024, 512)));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path(None, Path::new("a.map"), false), None);
        assert_eq!(
            output_path(Some(Path::new("out.json")), Path::new("fw/a.map"), false),
            Some(PathBuf::from("out.json"))
        );
        assert_eq!(
            output_path(Some(Path::new("out")), Path::new("fw/app.map"), true),
            Some(PathBuf::from("out/app.json"))
        );
    }
}
