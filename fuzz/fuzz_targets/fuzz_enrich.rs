// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;

use cve_commits::services::{enrich, table_io};

fuzz_target!(|data: &[u8]| {
    let Ok(table) = table_io::read_table_from(data) else {
        return;
    };
    if let Ok(enriched) = enrich::enrich_commits(&table) {
        assert!(enriched.len() <= table.len());
        let mut out = Vec::new();
        let _ = table_io::write_enriched_to(&mut out, &enriched);
    }
});
