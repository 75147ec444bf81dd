//! Card Text Extraction
//!
//! Pulls the one-line description and option entries out of a
//! pandoc-rendered man page. In pandoc's HTML the NAME one-liner lands in
//! the first paragraph, and options land in definition lists as
//! `<dt>`/`<dd>` pairs with the option name in a `<strong>` element.

use regex::Regex;

/// Title and description extracted for one command option. Either half
/// can be missing, in which case the caller falls back to manual input.
#[derive(Debug, Default, PartialEq)]
pub struct OptionEntry {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Normalize a user-supplied option name: `a` becomes `-a`, `all` becomes
/// `--all`, and anything already starting with `-` is taken as given.
pub fn normalize_option(raw: &str) -> String {
    if raw.starts_with('-') {
        raw.to_string()
    } else if raw.chars().count() == 1 {
        format!("-{}", raw)
    } else {
        format!("--{}", raw)
    }
}

/// Uppercase the first letter, leaving the rest untouched.
pub fn first_letter_capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Extract the page's one-line description from the first paragraph.
///
/// The NAME section renders as `name - description`; the text after the
/// dash (or em dash) is the description.
pub fn one_liner(html: &str) -> Option<String> {
    let paragraph = Regex::new(r"(?s)<p[^>]*>(.*?)</p>").ok()?;
    let tag = Regex::new(r"(?s)<[^>]*>").ok()?;
    let dash = Regex::new(r"\s[-—]\s(.*)").ok()?;

    let first = paragraph.captures(html)?.get(1)?.as_str();
    let text = tag.replace_all(first, "");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let capture = dash.captures(&text)?.get(1)?.as_str().trim().to_string();
    if capture.is_empty() {
        None
    } else {
        Some(capture)
    }
}

/// Find the definition-list entry for `option` and pull its title and
/// description.
pub fn find_option(html: &str, option: &str) -> OptionEntry {
    match find_option_dt(html, option) {
        Some((title, tail)) => OptionEntry {
            title: non_empty(title),
            description: option_description(tail),
        },
        None => OptionEntry::default(),
    }
}

/// Locate the `<dt>` whose `<strong>` text equals `option`.
/// Returns the term's inner HTML and the document tail following it.
fn find_option_dt<'a>(html: &'a str, option: &str) -> Option<(String, &'a str)> {
    let dt = Regex::new(r"(?s)<dt[^>]*>(.*?)</dt>").ok()?;
    let strong = Regex::new(r"(?s)<strong>(.*?)</strong>").ok()?;

    for captures in dt.captures_iter(html) {
        let whole = captures.get(0)?;
        let inner = captures.get(1)?.as_str();

        let matches = strong
            .captures_iter(inner)
            .any(|s| s.get(1).map(|m| m.as_str()) == Some(option));
        if matches {
            return Some((inner.trim().to_string(), &html[whole.end()..]));
        }
    }
    None
}

/// First paragraph of the `<dd>` that follows a matched `<dt>`, with the
/// first letter capitalized.
fn option_description(tail: &str) -> Option<String> {
    let dd = Regex::new(r"(?s)<dd[^>]*>(.*?)</dd>").ok()?;
    let paragraph = Regex::new(r"(?s)<p[^>]*>(.*?)</p>").ok()?;

    let dd_inner = dd.captures(tail)?.get(1)?.as_str();
    let text = paragraph.captures(dd_inner)?.get(1)?.as_str().trim();

    non_empty(text.to_string()).map(|d| first_letter_capitalize(&d))
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
