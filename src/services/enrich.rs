// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::num::ParseIntError;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{EnrichedRow, EnrichedTable, Table, is_noise_language, language_for_extension};
use crate::error::{Error, Result};

pub const CVE_ID_COLUMN: &str = "cve_id";
pub const FILE_COLUMN: &str = "file";

// Greedy prefix: the capture is whatever follows the last dot on the first line
static EXTENSION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".*\.(.*)").unwrap());

/// Row counts for one enrichment pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichStats {
    pub input_rows: usize,
    pub output_rows: usize,
    pub dropped_noise: usize,
    /// Surviving rows with no language
    pub unmapped: usize,
}

/// Year prefix of a stripped CVE id (`2021-34527` -> 2021)
pub fn parse_year(cve_id: &str) -> std::result::Result<i64, ParseIntError> {
    let prefix = cve_id.split('-').next().unwrap_or(cve_id);
    prefix.parse()
}

pub fn extract_extension(file: &str) -> Option<&str> {
    EXTENSION_REGEX
        .captures(file)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn enrich_commits(commits: &Table) -> Result<EnrichedTable> {
    enrich_commits_with_stats(commits).map(|(table, _)| table)
}

/// Derive year, extension and language for every row, then drop noise rows.
///
/// The first malformed `cve_id` aborts the whole batch. Input columns named
/// like a derived column are overwritten on output, never read.
pub fn enrich_commits_with_stats(commits: &Table) -> Result<(EnrichedTable, EnrichStats)> {
    let cve_idx = commits.column_index(CVE_ID_COLUMN)?;
    let file_idx = commits.column_index(FILE_COLUMN)?;

    let mut stats = EnrichStats {
        input_rows: commits.len(),
        ..EnrichStats::default()
    };
    let mut enriched = EnrichedTable::new(commits.headers().to_vec());

    for (i, fields) in commits.rows().iter().enumerate() {
        let cve_id = &fields[cve_idx];
        let year = parse_year(cve_id).map_err(|source| Error::MalformedIdentifier {
            cve_id: cve_id.clone(),
            row: i + 1,
            source,
        })?;

        let file_extension = extract_extension(&fields[file_idx]);
        let language = file_extension.and_then(language_for_extension);

        if is_noise_language(language) {
            stats.dropped_noise += 1;
            continue;
        }
        if language.is_none() {
            stats.unmapped += 1;
        }

        enriched.push_row(EnrichedRow::new(
            fields.clone(),
            year,
            file_extension.map(str::to_string),
            language,
        ))?;
    }

    stats.output_rows = enriched.len();
    debug!(
        input = stats.input_rows,
        output = stats.output_rows,
        dropped_noise = stats.dropped_noise,
        unmapped = stats.unmapped,
        "commits enriched"
    );

    Ok((enriched, stats))
}

