use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `[[Name]]` where the name is one or more characters other than `]`.
pub static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("link pattern is a valid regex"));

/// A single `[[Name]]` occurrence. Offsets are byte offsets into the scanned text,
/// `start` pointing at the first `[` and `end` just past the closing `]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

/// Iterate over every non-overlapping link in `text`, leftmost first.
pub fn find_links(text: &str) -> impl Iterator<Item = LinkMatch> + '_ {
    LINK_PATTERN.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let name = caps.get(1)?;
        Some(LinkMatch {
            name: name.as_str().to_string(),
            start: whole.start(),
            end: whole.end(),
        })
    })
}

/// Just the referenced note names, in order of appearance, duplicates kept.
pub fn link_names(text: &str) -> Vec<String> {
    find_links(text).map(|m| m.name).collect()
}
