// src/domain/slug/normalizer.rs
use super::config::SlugConfig;
use deunicode::deunicode;

/// Turns free text into a URL-safe token.
///
/// Only ASCII `a-z0-9`, whitespace and the configured separators survive the
/// first pass. Whitespace and separator runs then collapse into a single
/// separator, and separators are trimmed from both ends. When a hierarchy
/// separator is configured it keeps its position, whitespace around it is
/// dropped, and repeated hierarchy separators collapse into one.
///
/// An input with nothing usable left yields an empty string.
pub fn normalize(raw: &str, config: &SlugConfig) -> String {
    let separator = config.separator();
    let hierarchy = config.hierarchy_separator();
    let ascii_only = config.ascii_only();

    let transliterated;
    let source = if ascii_only {
        transliterated = deunicode(raw);
        transliterated.as_str()
    } else {
        raw
    };

    let kept: String = source
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| {
            c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c.is_whitespace()
                || c == separator
                || Some(c) == hierarchy
        })
        .collect();

    let kept = match hierarchy {
        Some(hierarchy) => tighten_around(&kept, hierarchy),
        None => kept,
    };

    let collapsed = collapse_runs(&kept, |c| c == separator || c.is_whitespace(), separator);
    let mut value = collapsed.trim_matches(separator).to_string();

    if let Some(hierarchy) = hierarchy {
        let collapsed = collapse_runs(&value, |c| c == hierarchy, hierarchy);
        // trimming the hierarchy separator can expose a plain separator
        value = collapsed
            .trim_matches(hierarchy)
            .trim_matches(separator)
            .to_string();
    }

    value
}

fn tighten_around(value: &str, hierarchy: char) -> String {
    let mut out = String::with_capacity(value.len());
    let mut after_hierarchy = false;

    for c in value.chars() {
        if c == hierarchy {
            while out.ends_with(char::is_whitespace) {
                out.pop();
            }
            out.push(c);
            after_hierarchy = true;
        } else if after_hierarchy && c.is_whitespace() {
            continue;
        } else {
            after_hierarchy = false;
            out.push(c);
        }
    }

    out
}

fn collapse_runs(value: &str, in_run: impl Fn(char) -> bool, replacement: char) -> String {
    let mut out = String::with_capacity(value.len());
    let mut inside = false;

    for c in value.chars() {
        if in_run(c) {
            if !inside {
                out.push(replacement);
            }
            inside = true;
        } else {
            out.push(c);
            inside = false;
        }
    }

    out
}
