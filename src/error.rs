// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::num::ParseIntError;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Malformed CVE identifier '{cve_id}' on row {row}")]
    #[diagnostic(
        code(cve_commits::enrich::malformed_identifier),
        help("The part before the first '-' must be a year, e.g. 2021-34527")
    )]
    MalformedIdentifier {
        cve_id: String,
        row: usize,
        #[source]
        source: ParseIntError,
    },

    #[error("Input table has no '{column}' column")]
    #[diagnostic(
        code(cve_commits::table::missing_column),
        help("Commit tables need at least 'cve_id' and 'file' columns")
    )]
    MissingColumn { column: String },

    #[error("Row {row} has {found} fields, expected {expected}")]
    #[diagnostic(code(cve_commits::table::row_width))]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(cve_commits::config::error))]
    Config(String),

    #[error("CSV error: {0}")]
    #[diagnostic(code(cve_commits::csv::error))]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
