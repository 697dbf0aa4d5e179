// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;
use std::sync::LazyLock;

/// Extension (without the dot) to language name. Keys are matched literally,
/// so `RS` or `Py` stay unmapped.
pub const LANGUAGE_TABLE: &[(&str, &str)] = &[
    ("c", "C"),
    ("h", "C"),
    ("cpp", "C++"),
    ("hpp", "C++"),
    ("cc", "C++"),
    ("hh", "C++"),
    ("java", "Java"),
    ("py", "Python"),
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("tsx", "TypeScript"),
    ("go", "Go"),
    ("rb", "Ruby"),
    ("php", "PHP"),
    ("phtml", "PHP"),
    ("cs", "C#"),
    ("swift", "Swift"),
    ("scala", "Scala"),
    ("rs", "Rust"),
    ("kt", "Kotlin"),
    ("clj", "Clojure"),
    ("cljc", "Clojure"),
    ("cljs", "Clojure"),
    ("groovy", "Groovy"),
    ("dart", "Dart"),
    ("lua", "Lua"),
    ("r", "R"),
    ("sh", "Shell"),
    ("bash", "Shell"),
    ("zsh", "Shell"),
    ("ps1", "PowerShell"),
    ("psm1", "PowerShell"),
    ("bat", "Batchfile"),
    ("cmd", "Batchfile"),
    ("awk", "Awk"),
    ("yml", "YAML"),
    ("yaml", "YAML"),
    ("json", "JSON"),
    ("xml", "XML"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("scss", "SCSS"),
    ("less", "Less"),
    ("styl", "Stylus"),
    ("sql", "SQL"),
    ("pl", "Perl"),
    ("jl", "Julia"),
    ("hcl", "HCL"),
    ("tf", "terraform"),
];

/// Language values dropped from enriched output.
///
/// `txt` and `md` never come out of [`LANGUAGE_TABLE`]; they are kept so the
/// exclusion set matches the historical analysis scripts.
pub const NOISE_LANGUAGES: [&str; 4] = ["txt", "md", "JSON", "YAML"];

static LANGUAGE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| LANGUAGE_TABLE.iter().copied().collect());

pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    LANGUAGE_MAP.get(extension).copied()
}

/// A missing language is never noise.
pub fn is_noise_language(language: Option<&str>) -> bool {
    language.is_some_and(|l| NOISE_LANGUAGES.contains(&l))
}
