// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::paths::{DataPaths, RESULT_PATH, RESULTED_IMAGES};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the collected CSV files (default: results)
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    /// Directory plots are written to by downstream tooling (default: images)
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,

    /// Enriched output path; defaults to <results_dir>/github_commit_enriched.csv
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

fn default_results_dir() -> PathBuf {
    PathBuf::from(RESULT_PATH)
}
fn default_images_dir() -> PathBuf {
    PathBuf::from(RESULTED_IMAGES)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            images_dir: default_images_dir(),
            output: None,
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.cve-commits.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".cve-commits.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // CVE_COMMITS_RESULTS_DIR, CVE_COMMITS_OUTPUT, ...
        figment = figment.merge(Env::prefixed("CVE_COMMITS_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "cve-commits").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn data_paths(&self) -> DataPaths {
        DataPaths::new(&self.results_dir, &self.images_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.data_paths().enriched_commits_path())
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref dir) = cli.results_dir {
            self.results_dir = dir.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.results_dir.as_os_str().is_empty() {
            return Err(Error::Config("results_dir cannot be empty".into()));
        }

        if self.images_dir.as_os_str().is_empty() {
            return Err(Error::Config("images_dir cannot be empty".into()));
        }

        if let Some(ref output) = self.output {
            if output.as_os_str().is_empty() {
                return Err(Error::Config("output cannot be empty when set".into()));
            }
        }

        Ok(())
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# cve-commits configuration

# Directory holding github_commit.csv, github_cves.csv, cve_project_cves.csv
# and filtered_products_cves.csv
results_dir = "results"

# Directory for generated plots
images_dir = "images"

# Enriched commit table (default: <results_dir>/github_commit_enriched.csv)
# output = "results/github_commit_enriched.csv"
"#;

        fs::write(&path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
