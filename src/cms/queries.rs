//! Query modifiers forwarded to the content API
//!
//! Values are opaque: filtering, ordering and field selection are evaluated by
//! the remote service. The named setters only fix the parameter key.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Ordered set of query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Queries(Vec<(String, String)>);

impl Queries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any earlier value for the same key
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: String, value: String) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn draft_key(self, value: impl Into<String>) -> Self {
        self.set("draftKey", value)
    }

    pub fn limit(self, value: u32) -> Self {
        self.set("limit", value.to_string())
    }

    pub fn offset(self, value: u32) -> Self {
        self.set("offset", value.to_string())
    }

    pub fn orders(self, value: impl Into<String>) -> Self {
        self.set("orders", value)
    }

    /// Full-text search
    pub fn q(self, value: impl Into<String>) -> Self {
        self.set("q", value)
    }

    pub fn fields<S: AsRef<str>>(self, fields: &[S]) -> Self {
        self.set("fields", join(fields))
    }

    pub fn ids<S: AsRef<str>>(self, ids: &[S]) -> Self {
        self.set("ids", join(ids))
    }

    pub fn filters(self, value: impl Into<String>) -> Self {
        self.set("filters", value)
    }

    pub fn depth(self, value: u8) -> Self {
        self.set("depth", value.to_string())
    }

    pub fn rich_editor_format(self, value: impl Into<String>) -> Self {
        self.set("richEditorFormat", value)
    }
}

fn join<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|v| v.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

impl FromIterator<(String, String)> for Queries {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut queries = Queries::new();
        for (k, v) in iter {
            queries.insert(k, v);
        }
        queries
    }
}

/// A single `key=value` pair as typed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPair(pub String, pub String);

impl FromStr for QueryPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("empty query key in '{}'", s));
        }
        Ok(QueryPair(key.to_string(), value.to_string()))
    }
}

impl fmt::Display for Queries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        f.write_str(&parts.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_value() {
        let queries = Queries::new().limit(10).orders("-publishedAt").limit(5);
        assert_eq!(queries.len(), 2);
        assert_eq!(queries.get("limit"), Some("5"));
        assert_eq!(queries.get("orders"), Some("-publishedAt"));
    }

    #[test]
    fn test_list_values_joined() {
        let queries = Queries::new()
            .fields(&["id", "title", "publishedAt"])
            .ids(&["a", "b"]);
        assert_eq!(queries.get("fields"), Some("id,title,publishedAt"));
        assert_eq!(queries.get("ids"), Some("a,b"));
    }

    #[test]
    fn test_values_are_not_interpreted() {
        let queries = Queries::new()
            .filters("title[contains]hello[and]category[equals]news")
            .set("customKey", "anything goes");
        assert_eq!(
            queries.get("filters"),
            Some("title[contains]hello[and]category[equals]news")
        );
        assert_eq!(queries.get("customKey"), Some("anything goes"));
    }

    #[test]
    fn test_keeps_insertion_order() {
        let queries = Queries::new().q("rust").draft_key("abc").depth(2);
        let keys: Vec<&str> = queries.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["q", "draftKey", "depth"]);
        assert_eq!(queries.to_string(), "q=rust&draftKey=abc&depth=2");
    }

    #[test]
    fn test_parse_pair() {
        let pair: QueryPair = "filters=title[equals]a=b".parse().unwrap();
        assert_eq!(pair, QueryPair("filters".into(), "title[equals]a=b".into()));

        let pair: QueryPair = "q=".parse().unwrap();
        assert_eq!(pair.1, "");

        assert!("limit".parse::<QueryPair>().is_err());
        assert!("=5".parse::<QueryPair>().is_err());
    }

    #[test]
    fn test_collect_from_pairs() {
        let queries: Queries = vec![
            ("limit".to_string(), "1".to_string()),
            ("limit".to_string(), "2".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries.get("limit"), Some("2"));
    }
}
