//! Query filtering for Folio.
//!
//! This module provides the one matching policy shared by every listing in
//! the catalog:
//!
//! - Case-insensitive substring matching over a record's designated fields
//! - Optional exact-match categorical selection (tag, status, kind)
//! - Stable output: results preserve the input collection's order
//!
//! The same predicate previously tended to get re-derived per collection
//! type; here it is factored once. A record type declares its searchable
//! fields through [`Searchable`] and its selector semantics through
//! [`Record`], and [`filter_records`] does the rest.
//!
//! ## Matching rules
//!
//! A record is included iff it matches BOTH parts:
//!
//! - **Text**: the query, lower-cased, is empty or is a substring of at
//!   least one field value (for list fields, of at least one element).
//! - **Selector**: no selector is given, or the record satisfies it exactly.
//!   An empty query and an absent selector are distinct sentinels: the
//!   former matches everything, the latter means "no categorical filter".

use serde::{Deserialize, Serialize};
use std::fmt;

/// A searchable field value.
///
/// Two explicit variants keep "scalar contains substring" and "some element
/// contains substring" as separate matchers instead of one ad hoc rule.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// A scalar text field (title, description)
    Text(&'a str),

    /// A list field (tags, tech stack); matches if any element matches
    List(&'a [String]),
}

/// A compiled free-text query.
///
/// The pattern is lower-cased once at construction so repeated matching
/// only lower-cases the candidate field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    pattern_lower: String,
}

impl TextQuery {
    /// Create a query from user input. Surrounding whitespace is ignored.
    pub fn new(pattern: &str) -> Self {
        TextQuery {
            pattern_lower: pattern.trim().to_lowercase(),
        }
    }

    /// Returns true if this query matches every record (empty pattern)
    pub fn matches_all(&self) -> bool {
        self.pattern_lower.is_empty()
    }

    /// Check a single scalar value against the query.
    pub fn matches_text(&self, text: &str) -> bool {
        if self.pattern_lower.is_empty() {
            return true;
        }
        text.to_lowercase().contains(&self.pattern_lower)
    }

    /// Check a single field against the query.
    pub fn matches_field(&self, field: &FieldValue<'_>) -> bool {
        match field {
            FieldValue::Text(text) => self.matches_text(text),
            FieldValue::List(items) => {
                if self.pattern_lower.is_empty() {
                    return true;
                }
                items.iter().any(|item| self.matches_text(item))
            }
        }
    }

    /// Check a record: true if any of its designated fields matches.
    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        if self.pattern_lower.is_empty() {
            return true;
        }
        record
            .search_fields()
            .iter()
            .any(|field| self.matches_field(field))
    }
}

impl fmt::Display for TextQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern_lower)
    }
}

impl From<&str> for TextQuery {
    fn from(pattern: &str) -> Self {
        TextQuery::new(pattern)
    }
}

/// A record type that exposes fields to the text filter.
pub trait Searchable {
    /// The designated field set this record is searched over.
    fn search_fields(&self) -> Vec<FieldValue<'_>>;
}

/// A record type that additionally supports categorical selection.
///
/// The selector type is per-record: tag membership for blog posts, status
/// equality for projects, kind equality for searchable items. Passing
/// `None` to [`filter_records`] disables categorical filtering entirely.
pub trait Record: Searchable {
    /// The categorical constraint this record type understands
    type Selector;

    /// Exact-match check against the selector.
    fn matches_selector(&self, selector: &Self::Selector) -> bool;
}

/// Exact-match tag constraint: set membership over a record's tag list.
///
/// Tag selection is case-sensitive; the selected value comes from the tag
/// universe itself, never from free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagSelector(pub String);

impl TagSelector {
    /// Create a new tag selector
    pub fn new(tag: impl Into<String>) -> Self {
        TagSelector(tag.into())
    }

    /// Get the selected tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TagSelector {
    fn from(tag: &str) -> Self {
        TagSelector(tag.to_string())
    }
}

/// Filter a record collection by a text query and an optional selector.
///
/// Pure and total: no input produces an error, the input is never mutated,
/// and the result is a stable sub-sequence of `records` (original relative
/// order, no duplication). Each call recomputes from scratch; there is no
/// incremental state to invalidate.
pub fn filter_records<'a, T: Record>(
    records: &'a [T],
    query: &TextQuery,
    selector: Option<&T::Selector>,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| query.matches(*record))
        .filter(|record| selector.map_or(true, |s| record.matches_selector(s)))
        .collect()
}

/// Partition an already-filtered result by a boolean attribute.
///
/// This is a derived view, not a different matching rule: relative order is
/// preserved within both halves. The first half holds records for which the
/// predicate is true.
pub fn partition_by<'a, T, F>(records: &[&'a T], predicate: F) -> (Vec<&'a T>, Vec<&'a T>)
where
    F: Fn(&T) -> bool,
{
    records.iter().copied().partition(|record| predicate(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlogPost, Project, ProjectStatus};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_posts() -> Vec<BlogPost> {
        vec![
            BlogPost::new(
                "1",
                "building-scalable-apis-nodejs",
                "Building Scalable REST APIs with Node.js",
                "A comprehensive guide to production-ready REST APIs.",
                date(2024, 1, 15),
                "8 min read",
            )
            .with_tags(&["Backend", "Node.js", "API Design"])
            .featured(),
            BlogPost::new(
                "2",
                "system-design-fundamentals",
                "System Design Fundamentals",
                "Load balancing, caching, and sharding.",
                date(2024, 1, 10),
                "12 min read",
            )
            .with_tags(&["Systems", "Architecture", "Backend"]),
            BlogPost::new(
                "3",
                "docker-containerization-guide",
                "Docker Containerization",
                "From development to production.",
                date(2024, 1, 5),
                "10 min read",
            )
            .with_tags(&["DevOps", "Docker"]),
        ]
    }

    fn make_projects() -> Vec<Project> {
        vec![
            Project::new(
                "blink-basket",
                "Blink Basket",
                "Full-stack e-commerce platform",
                "A comprehensive MERN stack solution.",
                ProjectStatus::Working,
                "https://github.com/example/blink-basket",
                "Full-Stack",
            )
            .with_tech_stack(&["MongoDB", "Express.js", "React", "Node.js"]),
            Project::new(
                "ai-doc-search",
                "AI Document Search Engine",
                "RAG-based intelligent document search",
                "Semantic search over document collections.",
                ProjectStatus::Building,
                "https://github.com/example/ai-doc-search",
                "AI/ML",
            )
            .with_tech_stack(&["Python", "LangChain"]),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let posts = make_posts();
        let results = filter_records(&posts, &TextQuery::new(""), None);
        assert_eq!(results.len(), posts.len());
        let ids: Vec<_> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_case_insensitive_tag_match() {
        let posts = make_posts();
        // "NODE" must match "Node.js" in title and tags
        let results = filter_records(&posts, &TextQuery::new("NODE"), None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let posts = make_posts();
        let results = filter_records(&posts, &TextQuery::new("  docker  "), None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "3");
    }

    #[test]
    fn test_unmatched_query_yields_empty() {
        let posts = make_posts();
        let results = filter_records(&posts, &TextQuery::new("zzz-no-match"), None);
        assert!(results.is_empty());
    }

    #[test]
    fn test_tag_selector_is_exact() {
        let posts = make_posts();
        let query = TextQuery::new("");

        let backend = TagSelector::new("Backend");
        let results = filter_records(&posts, &query, Some(&backend));
        assert_eq!(results.len(), 2);

        // Membership is case-sensitive, unlike the text filter
        let lowercase = TagSelector::new("backend");
        assert!(filter_records(&posts, &query, Some(&lowercase)).is_empty());
    }

    #[test]
    fn test_status_selector_excludes_other_status() {
        let projects = make_projects();
        let query = TextQuery::new("");

        let building = filter_records(&projects, &query, Some(&ProjectStatus::Building));
        assert_eq!(building.len(), 1);
        assert_eq!(building[0].name, "AI Document Search Engine");

        let working = filter_records(&projects, &query, Some(&ProjectStatus::Working));
        assert_eq!(working.len(), 1);
        assert_eq!(working[0].name, "Blink Basket");

        // No selector returns the full text-filtered set
        assert_eq!(filter_records(&projects, &query, None).len(), 2);
    }

    #[test]
    fn test_text_and_selector_combine_with_and() {
        let projects = make_projects();

        // "mongo" matches Blink Basket's tech stack, but the Building
        // selector excludes it
        let results = filter_records(
            &projects,
            &TextQuery::new("mongo"),
            Some(&ProjectStatus::Building),
        );
        assert!(results.is_empty());

        let results = filter_records(&projects, &TextQuery::new("mongo"), None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Blink Basket");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let posts = make_posts();
        let query = TextQuery::new("backend");
        let selector = TagSelector::new("Backend");

        let once = filter_records(&posts, &query, Some(&selector));
        let owned: Vec<BlogPost> = once.iter().map(|p| (*p).clone()).collect();
        let twice = filter_records(&owned, &query, Some(&selector));

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_empty_collection() {
        let posts: Vec<BlogPost> = Vec::new();
        assert!(filter_records(&posts, &TextQuery::new(""), None).is_empty());
        assert!(filter_records(&posts, &TextQuery::new("anything"), None).is_empty());
    }

    #[test]
    fn test_partition_preserves_order() {
        let posts = make_posts();
        let all = filter_records(&posts, &TextQuery::new(""), None);
        let (featured, regular) = partition_by(&all, |p| p.featured);

        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "1");
        let regular_ids: Vec<_> = regular.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(regular_ids, vec!["2", "3"]);
    }

    #[test]
    fn test_field_value_variants() {
        let query = TextQuery::new("express");
        assert!(!query.matches_text("React"));

        let tags = vec!["Express.js".to_string(), "React".to_string()];
        assert!(query.matches_field(&FieldValue::List(&tags)));
        assert!(!query.matches_field(&FieldValue::Text("React frontend")));
    }

    #[test]
    fn test_matches_all() {
        assert!(TextQuery::new("").matches_all());
        assert!(TextQuery::new("   ").matches_all());
        assert!(!TextQuery::new("x").matches_all());
    }
}
