//! Front-matter parsing

use serde_yaml::{Mapping, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("front-matter is not closed with ---")]
    Unterminated,

    #[error("front-matter must be a mapping of keys to values")]
    NotAMapping,

    #[error("failed to parse YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Raw front-matter of an entry, before schema validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub data: Mapping,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        // Front-matter must open on the very first line
        let Some(rest) = strip_fence(content) else {
            return Ok((FrontMatter::default(), content));
        };

        let (yaml_content, remaining) = split_closing_fence(rest).ok_or(FrontMatterError::Unterminated)?;

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        match serde_yaml::from_str::<Value>(yaml_content)? {
            Value::Mapping(data) => Ok((FrontMatter { data }, remaining)),
            Value::Null => Ok((FrontMatter::default(), remaining)),
            _ => Err(FrontMatterError::NotAMapping),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

/// Strip an opening `---` line
fn strip_fence(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    let rest = rest.trim_start_matches([' ', '\t']);
    if let Some(rest) = rest.strip_prefix("\r\n") {
        Some(rest)
    } else {
        rest.strip_prefix('\n')
    }
}

/// Find the closing `---` line, returning (yaml, body)
fn split_closing_fence(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body.trim_start_matches(['\n', '\r'])));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
publishedAt: 2024-01-15
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(
            fm.get("title").and_then(|v| v.as_str()),
            Some("Hello World")
        );
        assert_eq!(
            fm.get("publishedAt").and_then(|v| v.as_str()),
            Some("2024-01-15")
        );
        assert_eq!(remaining, "This is the content.\n");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just markdown\n\n---\n\nwith a rule";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.data.is_empty());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_empty_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("---\n---\nBody").unwrap();
        assert!(fm.data.is_empty());
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get("title").and_then(|v| v.as_str()), Some("Windows"));
        assert_eq!(remaining, "Body\r\n");
    }

    #[test]
    fn test_body_rule_not_closing_fence() {
        let content = "---\ntitle: Rules\n---\nabove\n---\nbelow\n";
        let (_, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(remaining, "above\n---\nbelow\n");
    }

    #[test]
    fn test_unterminated() {
        let err = FrontMatter::parse("---\ntitle: Open\n\nno end").unwrap_err();
        assert!(matches!(err, FrontMatterError::Unterminated));
    }

    #[test]
    fn test_not_a_mapping() {
        let err = FrontMatter::parse("---\n- a\n- b\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::NotAMapping));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = FrontMatter::parse("---\ntitle: [unclosed\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Yaml(_)));
    }
}
