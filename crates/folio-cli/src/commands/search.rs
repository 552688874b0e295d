//! Search command - global search across projects, blogs, and pages.

use crate::app::App;
use crate::OutputFormat;
use folio_core::{Config, ItemKind, TextQuery};
use std::time::Instant;

/// Run the search command.
pub fn run(
    config: Config,
    query: Option<&str>,
    kind: Option<ItemKind>,
    limit: Option<usize>,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let app = App::new(config)?;
    let limit = limit.unwrap_or(app.config.general.max_results);

    let query = TextQuery::new(query.unwrap_or(""));

    let start = Instant::now();
    let results = app.catalog.search_items(&query, kind.as_ref());
    let elapsed = start.elapsed();

    let shown = &results[..results.len().min(limit)];

    match output {
        OutputFormat::Text => {
            for item in shown {
                let kind_indicator = match item.kind {
                    ItemKind::Project => "📁",
                    ItemKind::Blog => "📄",
                    ItemKind::Page => "➜",
                };

                println!(
                    "{} {} - {} [{}] {}",
                    kind_indicator, item.title, item.description, item.kind, item.link
                );
            }

            eprintln!();
            eprintln!(
                "Found {} results in {:.3}ms",
                results.len(),
                elapsed.as_secs_f64() * 1000.0
            );
            if results.is_empty() && !query.matches_all() {
                eprintln!("No results found for \"{}\"", query);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
    }

    Ok(())
}
