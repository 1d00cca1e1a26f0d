use scraper::Html;

/// Normalizes a raw text field: decodes HTML entities, strips any markup down
/// to its visible text in document order, collapses whitespace runs to single
/// spaces and trims. Missing input becomes an empty string so nothing
/// downstream ever sees a null.
///
/// Malformed HTML is handled best-effort by the html5ever tokenizer inside
/// `scraper`; the worst outcome is degraded text, never an error.
pub fn sanitize(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(text) if !text.trim().is_empty() => text,
        _ => return String::new(),
    };
    let fragment = Html::parse_fragment(raw);
    let text: String = fragment.root_element().text().collect();
    collapse_whitespace(&text)
}

/// Collapses all whitespace runs (spaces, tabs, newlines) to single spaces
/// and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_becomes_empty_string() {
        assert_eq!(sanitize(None), "");
        assert_eq!(sanitize(Some("")), "");
        assert_eq!(sanitize(Some("   \n\t ")), "");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(sanitize(Some("Data &amp; Analytics")), "Data & Analytics");
        assert_eq!(sanitize(Some("Salary &gt; 100k")), "Salary > 100k");
    }

    #[test]
    fn markup_is_stripped_in_document_order() {
        let html = "<p><b>Senior</b> Data Analyst</p><ul><li>SQL</li><li>Python</li></ul>";
        assert_eq!(sanitize(Some(html)), "Senior Data AnalystSQLPython");
    }

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        assert_eq!(
            sanitize(Some("  Data\n\tAnalyst \u{a0}(hybrid)  ")),
            "Data Analyst (hybrid)"
        );
    }

    #[test]
    fn malformed_html_degrades_to_plain_text() {
        assert_eq!(sanitize(Some("<div><b>broken")), "broken");
        assert_eq!(sanitize(Some("a < b and c > d")), "a < b and c > d");
    }

    #[test]
    fn sanitizer_is_idempotent() {
        for input in [
            "Plain title",
            "Data &amp; Analytics",
            "<p>desc</p>",
            "  spaced   out  ",
        ] {
            let once = sanitize(Some(input));
            let twice = sanitize(Some(&once));
            assert_eq!(once, twice);
        }
    }
}
