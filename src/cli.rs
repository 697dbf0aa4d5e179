// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cve-commits")]
#[command(version)]
#[command(about = "Enrich CVE-linked commits with disclosure year and language", long_about = None)]
pub struct Cli {
    /// Directory holding the collected CSV files
    #[arg(long, env = "CVE_COMMITS_RESULTS_DIR", global = true)]
    pub results_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Add year, file_extension and language columns to a commit table
    Enrich {
        /// Commit table (default: <results_dir>/github_commit.csv)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (default: <results_dir>/github_commit_enriched.csv)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Write the enriched table to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },
    /// List the extension to language table and the excluded languages
    Languages,
    /// Show resolved data file locations
    Paths,
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
}
