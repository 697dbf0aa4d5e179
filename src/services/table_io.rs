// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::domain::{EnrichedTable, Table};
use crate::error::Result;

pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    let table = read_table_from(file)?;
    debug!(path = %path.display(), rows = table.len(), "table loaded");
    Ok(table)
}

/// Parse headered CSV. Rows with a different field count than the header fail.
pub fn read_table_from<R: Read>(reader: R) -> Result<Table> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let mut table = Table::new(csv.headers()?.iter());
    for record in csv.records() {
        table.push_row(record?.iter())?;
    }
    Ok(table)
}

/// Write the enriched table, creating the parent directory when needed.
/// The file is only touched once the whole CSV has been rendered.
pub fn write_enriched(path: &Path, table: &EnrichedTable) -> Result<()> {
    let mut buf = Vec::new();
    write_enriched_to(&mut buf, table)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, buf)?;
    debug!(path = %path.display(), rows = table.len(), "enriched table written");
    Ok(())
}

pub fn write_enriched_to<W: Write>(writer: W, table: &EnrichedTable) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(table.output_headers())?;
    for record in table.records() {
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}
