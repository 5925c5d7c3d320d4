// src/services/discovery.rs

//! Sheet name discovery from the document's edit page.
//!
//! The edit page embeds its tab list in inline script data as
//! `"name":"<tab>"` pairs, mixed with many unrelated names.

use regex::Regex;

use crate::error::Result;

/// Substrings that mark a name as a class tab.
const CLASS_TOKENS: [&str; 4] = ["ANO", "REG", "EJA", "NOT"];

/// Names at or above this length are script noise, not tab names.
const MAX_NAME_CHARS: usize = 30;

/// Extract likely class tab names from edit-page HTML, deduplicated in
/// first-seen order.
pub fn extract_sheet_names(html: &str) -> Result<Vec<String>> {
    let pattern = Regex::new(r#""name":"([^"]+)""#)?;

    let mut names: Vec<String> = Vec::new();
    for caps in pattern.captures_iter(html) {
        let Some(name) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if is_class_tab(name) && !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

fn is_class_tab(name: &str) -> bool {
    !name.contains('.')
        && !name.contains('/')
        && !name.contains("google")
        && name.chars().count() < MAX_NAME_CHARS
        && CLASS_TOKENS.iter().any(|token| name.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filters_noise() {
        let html = r#"
            {"name":"Login"},{"name":"6-ANO"},{"name":"fonts.googleapis"},
            {"name":"2-EJA-M"},{"name":"a/REG"},{"name":"6-ANO"},
            {"name":"google-NOT"},{"name":"1-REG-NOT-S"},
            {"name":"ANO-THAT-IS-MUCH-TOO-LONG-TO-BE-A-TAB"}
        "#;
        assert_eq!(
            extract_sheet_names(html).unwrap(),
            vec!["6-ANO", "2-EJA-M", "1-REG-NOT-S"]
        );
    }

    #[test]
    fn test_extract_nothing() {
        assert!(extract_sheet_names("<html></html>").unwrap().is_empty());
    }
}
