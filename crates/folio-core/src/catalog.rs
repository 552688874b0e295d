//! The in-memory content catalog.
//!
//! The `Catalog` is the central data structure: it owns the blog, project,
//! page, and work-area record sets plus the profile, and exposes every
//! search the presentation layer needs. It is populated exactly once, validated at
//! construction, and read-only afterwards.
//!
//! ## Architecture
//!
//! - Each record set is a plain `Vec` kept in canonical display order
//! - The global-search union is pre-built at construction in
//!   (projects, blogs, pages) concatenation order
//! - A `HashMap<String, usize>` maps slugs to post indices for O(1) lookup
//!
//! Searching vastly outnumbers everything else and collections are tiny,
//! so each query is a fresh linear pass; there is no incremental state.

use crate::content;
use crate::error::{FolioError, Result};
use crate::filter::{filter_records, partition_by, TagSelector, TextQuery};
use crate::types::{
    BlogPost, CatalogStats, ItemKind, Profile, Project, ProjectStatus, SearchableItem, WorkArea,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// The immutable portfolio catalog.
///
/// ## Example
///
/// ```rust
/// use folio_core::{Catalog, TextQuery};
///
/// let catalog = Catalog::with_content().unwrap();
/// for post in catalog.search_posts(&TextQuery::new("docker"), None) {
///     println!("{}: {}", post.slug, post.title);
/// }
/// ```
pub struct Catalog {
    /// Blog posts, newest first
    posts: Vec<BlogPost>,

    /// Projects in showcase order
    projects: Vec<Project>,

    /// Navigable pages
    pages: Vec<SearchableItem>,

    /// Pre-built global-search union: projects, then blogs, then pages
    items: Vec<SearchableItem>,

    /// Distinct blog tags in first-seen order
    tags: Vec<String>,

    /// Slug to post-index map
    slug_to_index: HashMap<String, usize>,

    /// Expertise areas for the work page
    work_areas: Vec<WorkArea>,

    /// The resume record
    profile: Profile,
}

impl Catalog {
    /// Build the catalog from the built-in content module.
    pub fn with_content() -> Result<Self> {
        Catalog::new(
            content::blog_posts(),
            content::projects(),
            content::pages(),
            content::work_areas(),
            content::profile(),
        )
    }

    /// Build a catalog from explicit record sets.
    ///
    /// Validates the uniqueness invariants (ids per set, slugs) and
    /// pre-computes the global-search union, the tag universe, and the
    /// slug lookup map.
    pub fn new(
        posts: Vec<BlogPost>,
        projects: Vec<Project>,
        pages: Vec<SearchableItem>,
        work_areas: Vec<WorkArea>,
        profile: Profile,
    ) -> Result<Self> {
        let mut post_ids = HashSet::new();
        let mut slug_to_index = HashMap::new();
        for (idx, post) in posts.iter().enumerate() {
            if !post_ids.insert(post.id.as_str()) {
                return Err(FolioError::DuplicateId {
                    id: post.id.clone(),
                });
            }
            if slug_to_index
                .insert(post.slug.as_str().to_string(), idx)
                .is_some()
            {
                return Err(FolioError::DuplicateSlug {
                    slug: post.slug.to_string(),
                });
            }
        }

        let mut project_ids = HashSet::new();
        for project in &projects {
            if !project_ids.insert(project.id.as_str()) {
                return Err(FolioError::DuplicateId {
                    id: project.id.clone(),
                });
            }
        }

        let mut page_ids = HashSet::new();
        for page in &pages {
            if !page_ids.insert(page.id.as_str()) {
                return Err(FolioError::DuplicateId {
                    id: page.id.clone(),
                });
            }
        }

        // Work areas are keyed by title
        let mut area_titles = HashSet::new();
        for area in &work_areas {
            if !area_titles.insert(area.title.as_str()) {
                return Err(FolioError::DuplicateId {
                    id: area.title.clone(),
                });
            }
        }

        // Union order is the contract for global search results
        let mut items = Vec::with_capacity(projects.len() + posts.len() + pages.len());
        items.extend(projects.iter().map(SearchableItem::from));
        items.extend(posts.iter().map(SearchableItem::from));
        items.extend(pages.iter().cloned());

        // First-seen tag order drives the tag filter UI
        let mut tags: Vec<String> = Vec::new();
        for post in &posts {
            for tag in &post.tags {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.clone());
                }
            }
        }

        info!(
            posts = posts.len(),
            projects = projects.len(),
            pages = pages.len(),
            tags = tags.len(),
            "Catalog built"
        );

        Ok(Catalog {
            posts,
            projects,
            pages,
            items,
            tags,
            slug_to_index,
            work_areas,
            profile,
        })
    }

    /// All blog posts in display order.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// All projects in display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// All navigable pages.
    pub fn pages(&self) -> &[SearchableItem] {
        &self.pages
    }

    /// The global-search union in (projects, blogs, pages) order.
    pub fn items(&self) -> &[SearchableItem] {
        &self.items
    }

    /// Distinct blog tags in first-seen order.
    pub fn all_tags(&self) -> &[String] {
        &self.tags
    }

    /// Expertise areas in display order.
    pub fn work_areas(&self) -> &[WorkArea] {
        &self.work_areas
    }

    /// The resume record.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Look up a blog post by slug.
    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.slug_to_index.get(slug).map(|&idx| &self.posts[idx])
    }

    /// Look up a blog post by slug, erroring on unknown slugs.
    pub fn require_post(&self, slug: &str) -> Result<&BlogPost> {
        self.post_by_slug(slug).ok_or_else(|| FolioError::PostNotFound {
            slug: slug.to_string(),
        })
    }

    /// Search blog posts by free text and an optional tag.
    ///
    /// Text matches title, description, and tags case-insensitively; the
    /// tag selector is exact set membership. Result order follows the
    /// post list.
    pub fn search_posts(
        &self,
        query: &TextQuery,
        tag: Option<&TagSelector>,
    ) -> Vec<&BlogPost> {
        let results = filter_records(&self.posts, query, tag);
        debug!(query = %query, matches = results.len(), "Blog search");
        results
    }

    /// Search projects by free text and an optional status.
    ///
    /// Text matches name, description, and tech stack; the status selector
    /// is exact equality.
    pub fn search_projects(
        &self,
        query: &TextQuery,
        status: Option<&ProjectStatus>,
    ) -> Vec<&Project> {
        let results = filter_records(&self.projects, query, status);
        debug!(query = %query, matches = results.len(), "Project search");
        results
    }

    /// Global search over the normalized union, title and description only.
    ///
    /// No ranking: match is binary and results keep the union's insertion
    /// order. An empty query returns the whole union; the presentation
    /// decides whether to display that.
    pub fn search_all(&self, query: &TextQuery) -> Vec<&SearchableItem> {
        self.search_items(query, None)
    }

    /// Global search narrowed to one item kind.
    pub fn search_items(
        &self,
        query: &TextQuery,
        kind: Option<&ItemKind>,
    ) -> Vec<&SearchableItem> {
        let results = filter_records(&self.items, query, kind);
        debug!(query = %query, matches = results.len(), "Global search");
        results
    }

    /// Split a filtered post list into (featured, regular) halves,
    /// preserving relative order within each.
    pub fn partition_featured<'a>(
        posts: &[&'a BlogPost],
    ) -> (Vec<&'a BlogPost>, Vec<&'a BlogPost>) {
        partition_by(posts, |post| post.featured)
    }

    /// Catalog statistics for the overview command.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            posts: self.posts.len() as u32,
            featured_posts: self.posts.iter().filter(|p| p.featured).count() as u32,
            projects: self.projects.len() as u32,
            pages: self.pages.len() as u32,
            work_areas: self.work_areas.len() as u32,
            tags: self.tags.len() as u32,
        }
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("posts", &self.posts.len())
            .field("projects", &self.projects.len())
            .field("pages", &self.pages.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn catalog() -> Catalog {
        Catalog::with_content().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_with_content_builds() {
        let catalog = catalog();
        let stats = catalog.stats();
        assert_eq!(stats.posts, 7);
        assert_eq!(stats.featured_posts, 2);
        assert_eq!(stats.projects, 6);
        assert_eq!(stats.pages, 5);
        assert_eq!(stats.work_areas, 6);
        assert_eq!(stats.total_items(), 18);
    }

    #[test]
    fn test_work_areas_accessible() {
        let catalog = catalog();
        let areas = catalog.work_areas();
        assert_eq!(areas.len(), 6);
        assert_eq!(areas[0].title, "Backend Development");
        // Work areas stay out of the global-search union
        assert!(!catalog.items().iter().any(|i| i.title == areas[0].title));
    }

    #[test]
    fn test_union_order_is_projects_blogs_pages() {
        let catalog = catalog();
        let kinds: Vec<ItemKind> = catalog.items().iter().map(|i| i.kind).collect();

        let first_blog = kinds.iter().position(|k| *k == ItemKind::Blog).unwrap();
        let first_page = kinds.iter().position(|k| *k == ItemKind::Page).unwrap();
        assert!(kinds[..first_blog].iter().all(|k| *k == ItemKind::Project));
        assert!(kinds[first_blog..first_page]
            .iter()
            .all(|k| *k == ItemKind::Blog));
        assert!(kinds[first_page..].iter().all(|k| *k == ItemKind::Page));
    }

    #[test]
    fn test_status_selector_scenario() {
        // query "" + selector building yields exactly the building projects
        let catalog = catalog();
        let results =
            catalog.search_projects(&TextQuery::new(""), Some(&ProjectStatus::Building));
        let names: Vec<_> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["AI Document Search Engine", "Cloud Deploy Kit"]);
    }

    #[test]
    fn test_text_query_scenario() {
        // query "mongo" + no selector matches via the MongoDB tech tag
        let catalog = catalog();
        let results = catalog.search_projects(&TextQuery::new("mongo"), None);
        let names: Vec<_> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Blink Basket", "Real-time Chat Platform"]);
    }

    #[test]
    fn test_global_search_docker() {
        let catalog = catalog();
        let results = catalog.search_all(&TextQuery::new("docker"));

        assert!(!results.is_empty());
        for item in &results {
            let text = format!("{} {}", item.title, item.description).to_lowercase();
            assert!(text.contains("docker"));
        }
        // Insertion order: any project hits precede blog hits
        let kinds: Vec<ItemKind> = results.iter().map(|i| i.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|k| match k {
            ItemKind::Project => 0,
            ItemKind::Blog => 1,
            ItemKind::Page => 2,
        });
        assert_eq!(kinds, sorted);
    }

    #[test]
    fn test_global_search_no_match() {
        let catalog = catalog();
        assert!(catalog.search_all(&TextQuery::new("zzz-no-match")).is_empty());
    }

    #[test]
    fn test_global_search_empty_query_returns_union() {
        let catalog = catalog();
        let results = catalog.search_all(&TextQuery::new(""));
        assert_eq!(results.len(), catalog.items().len());
    }

    #[test]
    fn test_kind_filter() {
        let catalog = catalog();
        let results = catalog.search_items(&TextQuery::new(""), Some(&ItemKind::Page));
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_post_by_slug() {
        let catalog = catalog();
        let post = catalog.post_by_slug("system-design-fundamentals").unwrap();
        assert!(post.featured);
        assert!(post.body.is_some());

        assert!(catalog.post_by_slug("missing-post").is_none());
        assert!(matches!(
            catalog.require_post("missing-post"),
            Err(FolioError::PostNotFound { .. })
        ));
    }

    #[test]
    fn test_tags_first_seen_order() {
        let catalog = catalog();
        let tags = catalog.all_tags();
        assert_eq!(&tags[..3], &["Backend", "Node.js", "API Design"]);
        assert_eq!(tags.len(), 17);
    }

    #[test]
    fn test_partition_featured_order() {
        let catalog = catalog();
        let all = catalog.search_posts(&TextQuery::new(""), None);
        let (featured, regular) = Catalog::partition_featured(&all);

        assert_eq!(featured.len(), 2);
        assert_eq!(regular.len(), 5);
        assert_eq!(featured[0].id, "1");
        assert_eq!(featured[1].id, "2");
        assert_eq!(regular[0].id, "3");
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let posts = vec![
            BlogPost::new("1", "same-slug", "First", "one", date(2024, 1, 1), "1 min"),
            BlogPost::new("2", "same-slug", "Second", "two", date(2024, 1, 2), "1 min"),
        ];
        let result = Catalog::new(posts, Vec::new(), Vec::new(), Vec::new(), content::profile());
        assert!(matches!(result, Err(FolioError::DuplicateSlug { .. })));
    }

    #[test]
    fn test_duplicate_work_area_title_rejected() {
        let areas = vec![
            WorkArea::new("Backend Development", "one", &["Node.js"], &["a"]),
            WorkArea::new("Backend Development", "two", &["Django"], &["b"]),
        ];
        let result =
            Catalog::new(Vec::new(), Vec::new(), Vec::new(), areas, content::profile());
        assert!(matches!(result, Err(FolioError::DuplicateId { .. })));
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let projects = vec![
            Project::new(
                "dup",
                "One",
                "d",
                "ld",
                ProjectStatus::Working,
                "https://example.com",
                "Backend",
            ),
            Project::new(
                "dup",
                "Two",
                "d",
                "ld",
                ProjectStatus::Building,
                "https://example.com",
                "Backend",
            ),
        ];
        let result =
            Catalog::new(Vec::new(), projects, Vec::new(), Vec::new(), content::profile());
        assert!(matches!(result, Err(FolioError::DuplicateId { .. })));
    }
}
