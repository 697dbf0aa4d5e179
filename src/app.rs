// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::path::{Path, PathBuf};

use console::style;
use tracing::{debug, info};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::{LANGUAGE_TABLE, NOISE_LANGUAGES};
use crate::error::{Error, Result};
use crate::services::{enrich, table_io};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            results_dir = %config.results_dir.display(),
            images_dir = %config.images_dir.display(),
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Enrich {
                input,
                output,
                stdout,
            } => self.enrich(input.as_deref(), output.as_deref(), *stdout),
            Commands::Languages => {
                self.print_languages();
                Ok(())
            }
            Commands::Paths => {
                for (name, path) in self.config.data_paths().entries() {
                    let status = if path.exists() { "found" } else { "missing" };
                    println!("{name:<24} {} ({status})", path.display());
                }
                Ok(())
            }
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                let rendered = toml::to_string_pretty(&self.config)
                    .map_err(|e| Error::Config(e.to_string()))?;
                print!("{rendered}");
                if let Some(ref path) = Config::config_path() {
                    let status = if path.exists() { "found" } else { "not found" };
                    eprintln!("# user config: {} ({status})", path.display());
                }
                Ok(())
            }
        }
    }

    fn enrich(&self, input: Option<&Path>, output: Option<&Path>, to_stdout: bool) -> Result<()> {
        let paths = self.config.data_paths();
        let input: PathBuf = input
            .map(Path::to_path_buf)
            .unwrap_or_else(|| paths.github_commit_data_path());

        self.print_status(&format!("Reading {}", input.display()));
        let commits = table_io::read_table(&input)?;

        let (enriched, stats) = enrich::enrich_commits_with_stats(&commits)?;
        info!(
            input = stats.input_rows,
            output = stats.output_rows,
            "enrichment finished"
        );
        self.print_info(&format!(
            "{} of {} rows kept ({} noise rows dropped, {} without a known language)",
            stats.output_rows, stats.input_rows, stats.dropped_noise, stats.unmapped
        ));

        if to_stdout {
            return table_io::write_enriched_to(std::io::stdout().lock(), &enriched);
        }

        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.output_path());
        table_io::write_enriched(&output, &enriched)?;
        self.print_status(&format!("Wrote {}", output.display()));
        Ok(())
    }

    fn print_languages(&self) {
        println!("{}", style("Extensions").bold().underlined());
        for (ext, language) in LANGUAGE_TABLE {
            println!("  .{ext:<8} {language}");
        }
        println!();
        println!("{}", style("Excluded").bold().underlined());
        println!("  {}", NOISE_LANGUAGES.join(", "));
    }

    fn print_status(&self, msg: &str) {
        eprintln!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }
}
