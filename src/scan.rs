use regex::{Regex, RegexBuilder};
use std::path::Path;
use std::process::Command;

/// Which half of the parser we are hunting for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtClass {
    /// `.c`, `.cc`, `.cpp`
    Source,
    /// `.h`, `.hpp`
    Header,
}

impl ExtClass {
    fn extensions(&self) -> &'static [&'static str] {
        match self {
            ExtClass::Source => &["c", "cc", "cpp"],
            ExtClass::Header => &["h", "hpp"],
        }
    }

    /// Preferred basename pattern, anchored at end of path. Deliberately
    /// case-sensitive, unlike the keyword filter.
    fn preferred_pattern(&self) -> Regex {
        let pattern = match self {
            ExtClass::Source => r"continuity[-_]?parser\.(c|cc|cpp)$",
            ExtClass::Header => r"continuity[-_]?parser\.(h|hpp)$",
        };
        Regex::new(pattern).unwrap()
    }
}

fn keyword_filter() -> Regex {
    RegexBuilder::new(r"continuity|parser|airpods.*parse|payload")
        .case_insensitive(true)
        .build()
        .unwrap()
}

/// List version-controlled files under `root` that look like parser
/// source/header candidates.
///
/// The listing is advisory: if git is missing, `root` is not a work tree,
/// or the command fails for any other reason, the candidate set is empty
/// and the run continues without a detected default.
pub fn scan_candidates(root: &Path, class: ExtClass) -> Vec<String> {
    let output = match Command::new("git")
        .arg("-C")
        .arg(root)
        .arg("ls-files")
        .output()
    {
        Ok(output) => output,
        Err(_) => return Vec::new(),
    };

    if !output.status.success() {
        return Vec::new();
    }

    let listing = String::from_utf8_lossy(&output.stdout);
    filter_candidates(listing.lines(), class)
}

/// Apply the extension-class and keyword filters to a raw listing,
/// preserving listing order.
pub fn filter_candidates<'a>(
    listing: impl Iterator<Item = &'a str>,
    class: ExtClass,
) -> Vec<String> {
    let keywords = keyword_filter();

    listing
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| has_extension(line, class.extensions()))
        .filter(|line| keywords.is_match(line))
        .map(str::to_string)
        .collect()
}

fn has_extension(path: &str, extensions: &[&str]) -> bool {
    match Path::new(path).extension().and_then(|s| s.to_str()) {
        Some(ext) => extensions.contains(&ext),
        None => false,
    }
}

/// Pick the default selection from a candidate list: the first candidate
/// matching the preferred filename pattern, else the first candidate, else
/// empty. Deterministic for a given listing.
pub fn default_candidate(candidates: &[String], class: ExtClass) -> String {
    let preferred = class.preferred_pattern();

    candidates
        .iter()
        .find(|c| preferred.is_match(c))
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_default()
}
