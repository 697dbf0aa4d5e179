// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use crate::error::{Error, Result};

pub const YEAR_COLUMN: &str = "year";
pub const FILE_EXTENSION_COLUMN: &str = "file_extension";
pub const LANGUAGE_COLUMN: &str = "language";

/// Columns added by enrichment, in output order
pub const DERIVED_COLUMNS: [&str; 3] = [YEAR_COLUMN, FILE_EXTENSION_COLUMN, LANGUAGE_COLUMN];

/// Ordered rows sharing one header. Every row is exactly as wide as the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.headers.len() {
            return Err(Error::RowWidth {
                row: self.rows.len() + 1,
                expected: self.headers.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column called `name`
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn {
                column: name.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRow {
    fields: Vec<String>,
    year: i64,
    file_extension: Option<String>,
    language: Option<&'static str>,
}

impl EnrichedRow {
    pub fn new(
        fields: Vec<String>,
        year: i64,
        file_extension: Option<String>,
        language: Option<&'static str>,
    ) -> Self {
        Self {
            fields,
            year,
            file_extension,
            language,
        }
    }

    /// Input fields as read, including any stale value in a derived column
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn file_extension(&self) -> Option<&str> {
        self.file_extension.as_deref()
    }

    pub fn language(&self) -> Option<&'static str> {
        self.language
    }

    /// Derived values in [`DERIVED_COLUMNS`] order. Nulls become empty fields.
    fn derived_values(&self) -> [String; 3] {
        [
            self.year.to_string(),
            self.file_extension.clone().unwrap_or_default(),
            self.language.unwrap_or_default().to_string(),
        ]
    }
}

/// Enriched rows under the input header.
///
/// A derived column that already exists in the input is overwritten in place;
/// the others are appended after the input columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichedTable {
    headers: Vec<String>,
    rows: Vec<EnrichedRow>,
}

impl EnrichedTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: EnrichedRow) -> Result<()> {
        if row.fields.len() != self.headers.len() {
            return Err(Error::RowWidth {
                row: self.rows.len() + 1,
                expected: self.headers.len(),
                found: row.fields.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Input header
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[EnrichedRow] {
        &self.rows
    }

    pub fn output_headers(&self) -> Vec<String> {
        let mut headers = self.headers.clone();
        for column in DERIVED_COLUMNS {
            if !self.headers.iter().any(|h| h == column) {
                headers.push(column.to_string());
            }
        }
        headers
    }

    /// Rows rendered under [`EnrichedTable::output_headers`]
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        let slots: Vec<Option<usize>> = DERIVED_COLUMNS
            .iter()
            .map(|column| self.headers.iter().position(|h| h == column))
            .collect();

        self.rows.iter().map(move |row| {
            let mut record = row.fields.clone();
            for (slot, value) in slots.iter().zip(row.derived_values()) {
                match slot {
                    Some(idx) => record[*idx] = value,
                    None => record.push(value),
                }
            }
            record
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Input value of a column on a given row
    pub fn field(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.rows.get(row)?.fields.get(idx).map(String::as_str)
    }
}
