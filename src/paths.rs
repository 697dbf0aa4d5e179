// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};

pub const RESULT_PATH: &str = "results";
pub const GITHUB_COMMIT_DATA: &str = "github_commit.csv";
pub const GITHUB_CVES_DATA: &str = "github_cves.csv";
pub const CVE_PROJECT_CVES_DATA: &str = "cve_project_cves.csv";
pub const FILTERED_PRODUCTS_CVES: &str = "filtered_products_cves.csv";
pub const ENRICHED_COMMITS_DATA: &str = "github_commit_enriched.csv";
pub const RESULTED_IMAGES: &str = "images";

/// Where the research data lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    results_dir: PathBuf,
    images_dir: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(RESULT_PATH, RESULTED_IMAGES)
    }
}

impl DataPaths {
    pub fn new(results_dir: impl Into<PathBuf>, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
            images_dir: images_dir.into(),
        }
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// CVE to commit mapping, one row per modified file
    pub fn github_commit_data_path(&self) -> PathBuf {
        self.results_dir.join(GITHUB_COMMIT_DATA)
    }

    pub fn github_cves_data_path(&self) -> PathBuf {
        self.results_dir.join(GITHUB_CVES_DATA)
    }

    pub fn cve_project_cves_data_path(&self) -> PathBuf {
        self.results_dir.join(CVE_PROJECT_CVES_DATA)
    }

    pub fn filtered_products_cves_path(&self) -> PathBuf {
        self.results_dir.join(FILTERED_PRODUCTS_CVES)
    }

    pub fn enriched_commits_path(&self) -> PathBuf {
        self.results_dir.join(ENRICHED_COMMITS_DATA)
    }

    /// Every named location, in display order
    pub fn entries(&self) -> Vec<(&'static str, PathBuf)> {
        vec![
            ("results", self.results_dir.clone()),
            ("github_commit", self.github_commit_data_path()),
            ("github_cves", self.github_cves_data_path()),
            ("cve_project_cves", self.cve_project_cves_data_path()),
            ("filtered_products_cves", self.filtered_products_cves_path()),
            ("enriched_commits", self.enriched_commits_path()),
            ("images", self.images_dir.clone()),
        ]
    }
}
