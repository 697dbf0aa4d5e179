// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! End-to-end tests for the `cve-commits` binary.

mod helpers;

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

use helpers::SAMPLE_CSV;

fn cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cve-commits").unwrap();
    cmd.current_dir(cwd)
        .env_remove("CVE_COMMITS_RESULTS_DIR")
        .env_remove("CVE_COMMITS_OUTPUT")
        .env_remove("CVE_COMMITS_IMAGES_DIR")
        .env("NO_COLOR", "1");
    cmd
}

// ─── enrich ──────────────────────────────────────────────────────────────────

#[test]
fn enrich_default_locations() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("results")).unwrap();
    fs::write(dir.path().join("results/github_commit.csv"), SAMPLE_CSV).unwrap();

    cmd(dir.path())
        .arg("enrich")
        .assert()
        .success()
        .stderr(predicate::str::contains("4 of 6 rows kept"));

    let written = fs::read_to_string(dir.path().join("results/github_commit_enriched.csv")).unwrap();
    assert!(written.contains("2021-34527,src/spooler.c,aaa111,2021,c,C"));
    assert!(!written.contains("package.json"));
    assert!(!written.contains("app.yml"));
}

#[test]
fn enrich_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("commits.csv");
    fs::write(&input, SAMPLE_CSV).unwrap();

    cmd(dir.path())
        .args(["enrich", "--stdout", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "cve_id,file,commit_hash,year,file_extension,language\n",
        ))
        .stdout(predicate::str::contains("2018-7600,modules/user.php,eee555,2018,php,PHP"));

    assert!(!dir.path().join("results").exists());
}

#[test]
fn enrich_results_dir_flag() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("run")).unwrap();
    fs::write(dir.path().join("run/github_commit.csv"), SAMPLE_CSV).unwrap();

    cmd(dir.path())
        .args(["--results-dir", "run", "enrich"])
        .assert()
        .success();

    assert!(dir.path().join("run/github_commit_enriched.csv").exists());
}

#[test]
fn enrich_malformed_identifier_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("commits.csv");
    fs::write(&input, "cve_id,file\n2021-1,a.rs\nCVE-2021-3,b.rs\n").unwrap();
    let output = dir.path().join("out.csv");

    cmd(dir.path())
        .arg("enrich")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CVE-2021-3"));

    assert!(!output.exists(), "no partial output on failure");
}

#[test]
fn enrich_missing_column_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("commits.csv");
    fs::write(&input, "cve_id,path\n2021-1,a.rs\n").unwrap();

    cmd(dir.path())
        .args(["enrich", "--stdout", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'file'"));
}

#[test]
fn enrich_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path()).arg("enrich").assert().failure();
}

// ─── informational commands ──────────────────────────────────────────────────

#[test]
fn languages_lists_table_and_exclusions() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust"))
        .stdout(predicate::str::contains("terraform"))
        .stdout(predicate::str::contains("txt, md, JSON, YAML"));
}

#[test]
fn paths_lists_locations() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path())
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("filtered_products_cves.csv"))
        .stdout(predicate::str::contains("missing"));
}

#[test]
fn config_prints_effective_values() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".cve-commits.toml"),
        "images_dir = \"figures\"\n",
    )
    .unwrap();

    cmd(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("images_dir = \"figures\""));
}
