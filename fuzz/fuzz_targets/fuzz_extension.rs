// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;

use cve_commits::domain::language_for_extension;
use cve_commits::services::enrich::{extract_extension, parse_year};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(ext) = extract_extension(s) {
            assert!(!ext.contains('.'), "extension must follow the last dot");
            let _ = language_for_extension(ext);
        }
        let _ = parse_year(s);
    }
});
