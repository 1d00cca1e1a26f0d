use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::CategoryRule;
use crate::pipeline::sanitize::collapse_whitespace;
use crate::types::JobLevel;

/// Standalone roman numerals I-III and digits 1-3: seniority suffixes like
/// "Analyst II" or "Engineer 2".
static LEVEL_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(i{1,3}|[1-3])\b").unwrap());

static NON_ALPHABETIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());

/// Buckets a sanitized job title into a canonical category label.
///
/// The title is lower-cased, truncated at the first hyphen (strips trailing
/// qualifiers like "- Remote" or "- Toronto"), has "sr."/"jr." expanded,
/// seniority suffixes and punctuation removed, and is then matched against
/// the ordered category taxonomy. Titles that match no category fall back to
/// a Title-Cased copy of the original, so novel roles survive rather than
/// being rejected.
pub fn canonicalize_title(title: &str, categories: &[CategoryRule]) -> String {
    let mut lowered = title.to_lowercase();
    if let Some((head, _)) = lowered.split_once('-') {
        lowered = head.trim().to_string();
    }
    let expanded = lowered.replace("sr.", "senior").replace("jr.", "junior");
    let stripped = LEVEL_SUFFIX.replace_all(&expanded, "");
    let stripped = NON_ALPHABETIC.replace_all(&stripped, "");
    let normalized = collapse_whitespace(&stripped);

    for rule in categories {
        for keyword in &rule.keywords {
            if normalized.contains(keyword.as_str()) {
                return rule.label.clone();
            }
        }
    }

    title_case(title)
}

/// Infers the seniority bucket from the original sanitized title. Substring
/// match, checked in fixed order so exactly one level is ever assigned.
pub fn detect_level(title: &str) -> JobLevel {
    let lowered = title.to_lowercase();
    if lowered.contains("senior") || lowered.contains("sr") {
        JobLevel::Senior
    } else if lowered.contains("junior") || lowered.contains("jr") || lowered.contains("entry") {
        JobLevel::Entry
    } else {
        JobLevel::Mid
    }
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest, leaving punctuation in place.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
