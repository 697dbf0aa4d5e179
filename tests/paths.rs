// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};

use cve_commits::paths::DataPaths;

#[test]
fn default_locations() {
    let paths = DataPaths::default();
    assert_eq!(paths.results_dir(), Path::new("results"));
    assert_eq!(paths.images_dir(), Path::new("images"));
    assert_eq!(
        paths.github_commit_data_path(),
        PathBuf::from("results/github_commit.csv")
    );
    assert_eq!(
        paths.github_cves_data_path(),
        PathBuf::from("results/github_cves.csv")
    );
    assert_eq!(
        paths.cve_project_cves_data_path(),
        PathBuf::from("results/cve_project_cves.csv")
    );
    assert_eq!(
        paths.filtered_products_cves_path(),
        PathBuf::from("results/filtered_products_cves.csv")
    );
}

#[test]
fn images_dir_is_independent_of_results_dir() {
    let paths = DataPaths::new("/data/run1", "images");
    assert_eq!(
        paths.enriched_commits_path(),
        PathBuf::from("/data/run1/github_commit_enriched.csv")
    );
    assert_eq!(paths.images_dir(), Path::new("images"));
}

#[test]
fn entries_list_every_location() {
    let names: Vec<_> = DataPaths::default()
        .entries()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        names,
        vec![
            "results",
            "github_commit",
            "github_cves",
            "cve_project_cves",
            "filtered_products_cves",
            "enriched_commits",
            "images",
        ]
    );
}
