//! Application state management.

use folio_core::{Catalog, Config};
use tracing::info;

/// Shared application state.
pub struct App {
    /// Configuration
    pub config: Config,

    /// The content catalog
    pub catalog: Catalog,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let catalog = Catalog::with_content()?;
        let stats = catalog.stats();

        info!(
            posts = stats.posts,
            projects = stats.projects,
            pages = stats.pages,
            "Application initialized"
        );

        Ok(App { config, catalog })
    }
}
