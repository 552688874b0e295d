//! Core data types for Folio.
//!
//! This module defines the record shapes held by the catalog. These types are
//! designed to be:
//!
//! - **Immutable**: Built once at startup, never edited afterwards
//! - **Serializable**: For JSON output at the CLI boundary
//! - **Searchable**: Each record declares which of its fields the shared
//!   query filter inspects

use crate::filter::{FieldValue, Record, Searchable, TagSelector};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// URL-safe identifier for a blog post.
///
/// Slugs are unique within the blog set and stable: they double as routing
/// keys (`/blogs/<slug>`), so they must never change once published.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(pub String);

impl Slug {
    /// Create a new slug from a string
    pub fn new(slug: impl Into<String>) -> Self {
        Slug(slug.into())
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Slug(s.to_string())
    }
}

impl From<String> for Slug {
    fn from(s: String) -> Self {
        Slug(s)
    }
}

/// Delivery status of a project.
///
/// Status filtering is exact: selecting `Building` excludes every `Working`
/// project and vice versa. This is deliberately an enum rather than a free
/// string so the equality matcher cannot drift from the tag matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Under active construction, not yet deployed
    Building,
    /// Finished and running
    Working,
}

impl ProjectStatus {
    /// Human-readable label used in list output
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Building => "building",
            ProjectStatus::Working => "working",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "building" => Ok(ProjectStatus::Building),
            "working" => Ok(ProjectStatus::Working),
            _ => Err(format!("unknown project status: {}", s)),
        }
    }
}

/// Category of a globally searchable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Project,
    Blog,
    Page,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemKind::Project => "project",
            ItemKind::Blog => "blog",
            ItemKind::Page => "page",
        };
        f.write_str(label)
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project" | "projects" => Ok(ItemKind::Project),
            "blog" | "blogs" => Ok(ItemKind::Blog),
            "page" | "pages" => Ok(ItemKind::Page),
            _ => Err(format!("unknown item kind: {}", s)),
        }
    }
}

/// A blog post record.
///
/// The text filter inspects title, description, and tags. The body carries
/// the raw markdown source for posts that have one; rendering is left to
/// whatever consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique identifier within the blog set
    pub id: String,

    /// Stable URL-safe routing key
    pub slug: Slug,

    /// Post title
    pub title: String,

    /// Short summary shown in listings
    pub description: String,

    /// Publish date
    pub date: NaiveDate,

    /// Read-time label (e.g., "8 min read")
    pub read_time: String,

    /// Ordered tag list; compared case-insensitively by the text filter,
    /// exactly by the tag selector
    pub tags: Vec<String>,

    /// Whether the post is surfaced in the featured section
    pub featured: bool,

    /// Raw markdown body, if the full article ships with the catalog
    pub body: Option<String>,
}

impl BlogPost {
    /// Create a new blog post record.
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<Slug>,
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        read_time: impl Into<String>,
    ) -> Self {
        BlogPost {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            description: description.into(),
            date,
            read_time: read_time.into(),
            tags: Vec::new(),
            featured: false,
            body: None,
        }
    }

    /// Set the tag list
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Mark the post as featured
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Attach the markdown body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Check if the post carries a given tag (exact, case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Text(&self.title),
            FieldValue::Text(&self.description),
            FieldValue::List(&self.tags),
        ]
    }
}

impl Record for BlogPost {
    type Selector = TagSelector;

    fn matches_selector(&self, selector: &TagSelector) -> bool {
        self.has_tag(selector.as_str())
    }
}

/// A project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier within the project set
    pub id: String,

    /// Project name
    pub name: String,

    /// One-line summary shown in listings and global search
    pub description: String,

    /// Extended description shown on the project card
    pub long_description: String,

    /// Ordered technology tags
    pub tech_stack: Vec<String>,

    /// Current delivery status
    pub status: ProjectStatus,

    /// Repository URL
    pub repo_url: String,

    /// Live-demo URL, for deployed projects
    pub live_url: Option<String>,

    /// Category label (e.g., "Full-Stack", "DevOps")
    pub category: String,
}

impl Project {
    /// Create a new project record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        long_description: impl Into<String>,
        status: ProjectStatus,
        repo_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Project {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            long_description: long_description.into(),
            tech_stack: Vec::new(),
            status,
            repo_url: repo_url.into(),
            live_url: None,
            category: category.into(),
        }
    }

    /// Set the technology stack
    pub fn with_tech_stack(mut self, tech: &[&str]) -> Self {
        self.tech_stack = tech.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Set the live-demo URL
    pub fn with_live_url(mut self, url: impl Into<String>) -> Self {
        self.live_url = Some(url.into());
        self
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Text(&self.name),
            FieldValue::Text(&self.description),
            FieldValue::List(&self.tech_stack),
        ]
    }
}

impl Record for Project {
    type Selector = ProjectStatus;

    fn matches_selector(&self, selector: &ProjectStatus) -> bool {
        self.status == *selector
    }
}

/// The normalized shape used for global search.
///
/// Projects and blog posts are converted into this shape and concatenated
/// with the static page list; only title and description are searchable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchableItem {
    /// Unique identifier within the union
    pub id: String,

    /// Display title
    pub title: String,

    /// Which record set the item came from
    pub kind: ItemKind,

    /// Target link (site-relative path)
    pub link: String,

    /// Short description
    pub description: String,
}

impl SearchableItem {
    /// Create a new searchable item.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ItemKind,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        SearchableItem {
            id: id.into(),
            title: title.into(),
            kind,
            link: link.into(),
            description: description.into(),
        }
    }
}

impl From<&Project> for SearchableItem {
    fn from(project: &Project) -> Self {
        SearchableItem::new(
            project.id.clone(),
            project.name.clone(),
            ItemKind::Project,
            "/projects",
            project.description.clone(),
        )
    }
}

impl From<&BlogPost> for SearchableItem {
    fn from(post: &BlogPost) -> Self {
        SearchableItem::new(
            post.id.clone(),
            post.title.clone(),
            ItemKind::Blog,
            format!("/blogs/{}", post.slug),
            post.description.clone(),
        )
    }
}

impl Searchable for SearchableItem {
    fn search_fields(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Text(&self.title),
            FieldValue::Text(&self.description),
        ]
    }
}

impl Record for SearchableItem {
    type Selector = ItemKind;

    fn matches_selector(&self, selector: &ItemKind) -> bool {
        self.kind == *selector
    }
}

/// The resume record: professional background rendered by the `resume`
/// command. Static like everything else in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub contact: Contact,
    pub summary: String,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
}

/// Contact details for the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

/// A named group of skills (e.g., "Databases").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

impl SkillGroup {
    /// Create a new skill group
    pub fn new(category: impl Into<String>, items: &[&str]) -> Self {
        SkillGroup {
            category: category.into(),
            items: items.iter().map(|i| i.to_string()).collect(),
        }
    }
}

/// A single experience entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub engagement: String,
    pub period: String,
    pub highlights: Vec<String>,
}

/// A single education entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub year: String,
}

/// One engineering expertise area on the work page: what it covers, the
/// technologies involved, and a few concrete highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkArea {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub highlights: Vec<String>,
}

impl WorkArea {
    /// Create a new work area
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        technologies: &[&str],
        highlights: &[&str],
    ) -> Self {
        WorkArea {
            title: title.into(),
            description: description.into(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
        }
    }
}

/// Statistics about the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of blog posts
    pub posts: u32,

    /// Number of featured blog posts
    pub featured_posts: u32,

    /// Number of projects
    pub projects: u32,

    /// Number of navigable pages
    pub pages: u32,

    /// Number of work expertise areas
    pub work_areas: u32,

    /// Number of distinct blog tags
    pub tags: u32,
}

impl CatalogStats {
    /// Total number of globally searchable items
    pub fn total_items(&self) -> u32 {
        self.posts + self.projects + self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_project_status_parse() {
        assert_eq!(
            "building".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Building
        );
        assert_eq!(
            "Working".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Working
        );
        assert!("shipped".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_project_status_display() {
        assert_eq!(ProjectStatus::Building.to_string(), "building");
        assert_eq!(ProjectStatus::Working.to_string(), "working");
    }

    #[test]
    fn test_blog_post_builder() {
        let post = BlogPost::new(
            "1",
            "building-scalable-apis-nodejs",
            "Building Scalable REST APIs with Node.js",
            "A comprehensive guide",
            date(2024, 1, 15),
            "8 min read",
        )
        .with_tags(&["Backend", "Node.js"])
        .featured();

        assert_eq!(post.slug.as_str(), "building-scalable-apis-nodejs");
        assert!(post.featured);
        assert!(post.has_tag("Node.js"));
        assert!(!post.has_tag("node.js")); // tag membership is exact
        assert!(post.body.is_none());
    }

    #[test]
    fn test_item_from_blog_post() {
        let post = BlogPost::new(
            "3",
            "docker-containerization-guide",
            "Docker Containerization",
            "Docker best practices",
            date(2024, 1, 5),
            "10 min read",
        );

        let item = SearchableItem::from(&post);
        assert_eq!(item.kind, ItemKind::Blog);
        assert_eq!(item.link, "/blogs/docker-containerization-guide");
        assert_eq!(item.title, "Docker Containerization");
    }

    #[test]
    fn test_item_from_project() {
        let project = Project::new(
            "blink-basket",
            "Blink Basket",
            "Full-stack e-commerce platform",
            "A comprehensive MERN stack solution",
            ProjectStatus::Working,
            "https://github.com/example/blink-basket",
            "Full-Stack",
        );

        let item = SearchableItem::from(&project);
        assert_eq!(item.kind, ItemKind::Project);
        assert_eq!(item.link, "/projects");
    }

    #[test]
    fn test_catalog_stats_total() {
        let stats = CatalogStats {
            posts: 7,
            featured_posts: 2,
            projects: 6,
            pages: 5,
            work_areas: 6,
            tags: 18,
        };
        assert_eq!(stats.total_items(), 18);
    }

    #[test]
    fn test_work_area_builder() {
        let area = WorkArea::new(
            "Backend Development",
            "Building robust RESTful APIs",
            &["Node.js", "Express"],
            &["Designed scalable API architectures"],
        );
        assert_eq!(area.technologies.len(), 2);
        assert_eq!(area.highlights.len(), 1);
    }
}
