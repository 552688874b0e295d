//! Overview command - show catalog statistics.

use crate::app::App;
use folio_core::Config;

/// Run the overview command.
pub fn run(config: Config) -> anyhow::Result<()> {
    let app = App::new(config)?;

    let stats = app.catalog.stats();

    println!("Folio Catalog Overview");
    println!("======================");
    println!();
    println!("Summary:");
    println!("  Blog posts:       {}", stats.posts);
    println!("  Featured posts:   {}", stats.featured_posts);
    println!("  Projects:         {}", stats.projects);
    println!("  Pages:            {}", stats.pages);
    println!("  Work areas:       {}", stats.work_areas);
    println!("  Searchable items: {}", stats.total_items());

    println!();
    println!("Tags ({}):", stats.tags);
    for tag in app.catalog.all_tags() {
        let count = app
            .catalog
            .posts()
            .iter()
            .filter(|p| p.has_tag(tag))
            .count();
        println!("  {} ({})", tag, count);
    }

    println!();
    println!(
        "Config file: {}",
        folio_core::Config::default_config_path()?.display()
    );

    Ok(())
}
