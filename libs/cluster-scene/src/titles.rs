//! # Case Text
//!
//! Display strings for the host: readable case titles from source file
//! names, the condensed summary shown in the side panel and tooltip text.

use std::sync::OnceLock;

use regex::Regex;

use crate::dataset::CasePoint;

static PATTERNS: OnceLock<TextPatterns> = OnceLock::new();

/// Opening heading of a section and the line-leading headings that end it.
#[derive(Debug)]
struct SectionPattern {
    opening: Regex,
    end: Regex,
}

impl SectionPattern {
    fn new(heading: &str, ended_by: &str) -> Self {
        Self {
            // "1. **Summary**:" needs the colon to open a section
            opening: Regex::new(&format!(r"(?i)\d+\.\s*\*{{0,2}}{heading}\*{{0,2}}\s*:"))
                .expect("section heading regex must compile"),
            // "3. **Court's Holding**" ends one with or without it
            end: Regex::new(&format!(r"(?i)\n\s*\d+\.\s*\*{{0,2}}(?:{ended_by})"))
                .expect("section end regex must compile"),
        }
    }

    /// Text after the first opening heading, up to the next ending heading.
    fn body<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = self.opening.find(text)?.end();
        let rest = &text[start..];
        let end = self.end.find(rest).map_or(rest.len(), |m| m.start());
        let body = rest[..end].trim();
        (!body.is_empty()).then_some(body)
    }
}

#[derive(Debug)]
struct TextPatterns {
    file_name: Regex,
    summary: SectionPattern,
    key_legal_issue: SectionPattern,
}

impl TextPatterns {
    fn new() -> Self {
        Self {
            // 2024-05-01_<court>_<docket>_<Case-Name>.pdf
            file_name: Regex::new(r"^(\d{4}-\d{2}-\d{2})_[^_]+_[^_]+_(.+?)\.pdf$")
                .expect("file name regex must compile"),
            summary: SectionPattern::new("summary", "key legal issue|court|eli5"),
            key_legal_issue: SectionPattern::new("key legal issue", "summary|court|eli5"),
        }
    }
}

fn patterns() -> &'static TextPatterns {
    PATTERNS.get_or_init(TextPatterns::new)
}

/// Turns `YYYY-MM-DD_<a>_<b>_<Name>.pdf` into `"<Name> (YYYY-MM-DD)"`.
/// Other inputs are returned unchanged.
///
/// # Example
///
/// ```rust
/// use cluster_scene::titles::case_title;
///
/// assert_eq!(
///     case_title("2024-05-01_XYZ_v_ABC_Some-Case-Name.pdf"),
///     "ABC_Some-Case-Name (2024-05-01)"
/// );
/// assert_eq!(case_title("notes.txt"), "notes.txt");
/// ```
pub fn case_title(file_name: &str) -> String {
    match patterns().file_name.captures(file_name) {
        Some(caps) => {
            let name = caps[2].trim_end_matches('.');
            format!("{name} ({})", &caps[1])
        }
        None => file_name.to_string(),
    }
}

/// Keeps only the numbered "Summary" and "Key Legal Issue" sections of a
/// generated case summary. Headings are case-insensitive and may be wrapped
/// in `**`. A section runs until the next numbered Summary, Key Legal Issue,
/// Court or ELI5 line, so `3. Court's Holding` ends it even without a colon.
/// Text without either section is returned unchanged.
///
/// # Example
///
/// ```rust
/// use cluster_scene::titles::summary_sections;
///
/// let text = "1. **Summary**: Tenant sued.\n\
///             2. **Key Legal Issue**: Notice.\n\
///             3. Court: Appeals";
/// assert_eq!(summary_sections(text), "Summary: Tenant sued.\n\nKey Legal Issue: Notice.");
/// assert_eq!(summary_sections("free text"), "free text");
/// ```
pub fn summary_sections(text: &str) -> String {
    let patterns = patterns();
    let summary = patterns.summary.body(text);
    let issue = patterns.key_legal_issue.body(text);

    let mut out = String::new();
    if let Some(summary) = summary {
        out.push_str("Summary: ");
        out.push_str(summary);
        out.push_str("\n\n");
    }
    if let Some(issue) = issue {
        out.push_str("Key Legal Issue: ");
        out.push_str(issue);
    }

    let out = out.trim();
    if out.is_empty() {
        text.to_string()
    } else {
        out.to_string()
    }
}

/// Hover text: the case title over its cluster label.
pub fn tooltip(point: &CasePoint) -> String {
    format!("{}\n{}", point.title, point.label)
}
