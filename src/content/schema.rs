//! Schema of the local blog collection
//!
//! Every entry needs a non-empty string `title` and a `publishedAt` value that
//! coerces to a calendar date. Validation collects all issues of an entry so
//! that a failing file can be fixed in one pass.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use serde_yaml::Value;
use std::fmt;

use super::FrontMatter;

const TITLE: &str = "title";
const PUBLISHED_AT: &str = "publishedAt";

/// Validated front-matter fields of a blog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogFields {
    pub title: String,
    pub published_at: DateTime<Utc>,
}

/// What is wrong with a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Required,
    ExpectedString,
    Empty,
    InvalidDate,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IssueKind::Required => "Required",
            IssueKind::ExpectedString => "Expected string",
            IssueKind::Empty => "String must contain at least 1 character(s)",
            IssueKind::InvalidDate => "Invalid date",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    pub field: &'static str,
    pub kind: IssueKind,
}

impl SchemaIssue {
    pub fn new(field: &'static str, kind: IssueKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// All issues found in one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaErrors(pub Vec<SchemaIssue>);

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for SchemaErrors {}

impl SchemaErrors {
    pub fn issues(&self) -> &[SchemaIssue] {
        &self.0
    }

    pub fn has(&self, field: &str, kind: IssueKind) -> bool {
        self.0.iter().any(|i| i.field == field && i.kind == kind)
    }
}

/// Validate an entry's front-matter against the blog schema
pub fn validate(fm: &FrontMatter) -> Result<BlogFields, SchemaErrors> {
    let mut issues = Vec::new();

    let title = match fm.get(TITLE) {
        None | Some(Value::Null) => {
            issues.push(SchemaIssue::new(TITLE, IssueKind::Required));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            issues.push(SchemaIssue::new(TITLE, IssueKind::Empty));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(SchemaIssue::new(TITLE, IssueKind::ExpectedString));
            None
        }
    };

    let published_at = match fm.get(PUBLISHED_AT).and_then(coerce_date) {
        Some(date) => Some(date),
        None => {
            issues.push(SchemaIssue::new(PUBLISHED_AT, IssueKind::InvalidDate));
            None
        }
    };

    match (title, published_at) {
        (Some(title), Some(published_at)) => Ok(BlogFields {
            title,
            published_at,
        }),
        _ => Err(SchemaErrors(issues)),
    }
}

/// Coerce a front-matter value to a date.
///
/// Strings are parsed in the common date formats, integers are milliseconds
/// since the Unix epoch. Naive date-times are read as UTC.
pub fn coerce_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date_string(s),
        Value::Number(n) => {
            let millis = match n.as_i64() {
                Some(ms) => ms,
                None => {
                    let f = n.as_f64()?;
                    if !f.is_finite() {
                        return None;
                    }
                    f.trunc() as i64
                }
            };
            DateTime::<Utc>::from_timestamp_millis(millis)
        }
        Value::Tagged(tagged) => coerce_date(&tagged.value),
        _ => None,
    }
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Try RFC 3339 / ISO 8601 first, then RFC 2822
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let offset_formats = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
    for fmt in offset_formats {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
