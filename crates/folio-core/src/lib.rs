//! # Folio Core Library
//!
//! This crate provides the content catalog and search functionality for the
//! Folio portfolio browser. All content is built in: record sets are
//! constructed once at startup, validated, and never mutated.
//!
//! ## Architecture
//!
//! - **Types** (`types`): Record shapes (blog posts, projects, pages, profile)
//! - **Filter** (`filter`): The shared text-plus-selector matching logic
//! - **Catalog** (`catalog`): The immutable record store and its search ops
//! - **Content** (`content`): The hardcoded record sets
//! - **Config** (`config`): Configuration management
//!
//! ## Example
//!
//! ```rust
//! use folio_core::{Catalog, ProjectStatus, TextQuery};
//!
//! let catalog = Catalog::with_content().unwrap();
//!
//! // Projects still under construction that mention Python
//! let query = TextQuery::new("python");
//! for project in catalog.search_projects(&query, Some(&ProjectStatus::Building)) {
//!     println!("{} [{}]", project.name, project.status);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::Config;
pub use error::{FolioError, Result};
pub use filter::{filter_records, partition_by, FieldValue, Record, Searchable, TagSelector, TextQuery};
pub use types::{
    BlogPost, CatalogStats, ItemKind, Profile, Project, ProjectStatus, SearchableItem, Slug,
    WorkArea,
};
