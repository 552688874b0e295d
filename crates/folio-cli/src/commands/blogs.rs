//! Blogs command - list and search blog posts.

use crate::app::App;
use crate::OutputFormat;
use folio_core::{BlogPost, Catalog, Config, TagSelector, TextQuery};

/// Run the blogs command.
pub fn run(
    config: Config,
    query: Option<&str>,
    tag: Option<&str>,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let app = App::new(config)?;

    let query = TextQuery::new(query.unwrap_or(""));
    let selector = tag.map(TagSelector::new);
    let results = app.catalog.search_posts(&query, selector.as_ref());

    match output {
        OutputFormat::Text => {
            let (featured, regular) = Catalog::partition_featured(&results);

            if !featured.is_empty() {
                println!("★ Featured");
                println!();
                for post in &featured {
                    print_post(&app, post);
                }
            }

            for post in &regular {
                print_post(&app, post);
            }

            let label = if results.len() == 1 { "article" } else { "articles" };
            eprintln!("{} {} found", results.len(), label);
            if results.is_empty() {
                eprintln!("Try adjusting your search or filter criteria");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}

fn print_post(app: &App, post: &BlogPost) {
    println!("📄 {}", post.title);
    println!("   {}", post.description);

    let mut meta = Vec::new();
    if app.config.ui.show_dates {
        meta.push(post.date.format("%B %-d, %Y").to_string());
    }
    meta.push(post.read_time.clone());
    if app.config.ui.show_tags && !post.tags.is_empty() {
        meta.push(post.tags.join(", "));
    }
    println!("   {}", meta.join(" · "));
    println!("   folio show {}", post.slug);
    println!();
}
