// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use cve_commits::domain::Table;

/// Build a commit table with `cve_id`, `file` and `commit_hash` columns
#[allow(dead_code)]
pub fn make_commits(rows: &[(&str, &str)]) -> Table {
    let mut table = Table::new(["cve_id", "file", "commit_hash"]);
    for (i, (cve_id, file)) in rows.iter().enumerate() {
        table
            .push_row([cve_id.to_string(), file.to_string(), format!("{i:040x}")])
            .unwrap();
    }
    table
}

/// Headered CSV with the same columns as [`make_commits`]
#[allow(dead_code)]
pub const SAMPLE_CSV: &str = "\
cve_id,file,commit_hash
2021-34527,src/spooler.c,aaa111
2019-0708,docs/README.md,bbb222
2022-22965,config/app.yml,ccc333
2020-1472,package.json,ddd444
2018-7600,modules/user.php,eee555
2017-5638,LICENSE,fff666
";
