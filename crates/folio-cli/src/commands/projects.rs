//! Projects command - list and search projects.

use crate::app::App;
use crate::OutputFormat;
use folio_core::{Config, ProjectStatus, TextQuery};

/// Run the projects command.
pub fn run(
    config: Config,
    query: Option<&str>,
    status: Option<ProjectStatus>,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let app = App::new(config)?;

    let query = TextQuery::new(query.unwrap_or(""));
    let results = app.catalog.search_projects(&query, status.as_ref());

    match output {
        OutputFormat::Text => {
            for project in &results {
                let status_indicator = match project.status {
                    ProjectStatus::Building => "🚧",
                    ProjectStatus::Working => "✅",
                };

                println!(
                    "{} {} [{}] ({})",
                    status_indicator, project.name, project.status, project.category
                );
                println!("   {}", project.description);

                if app.config.ui.show_tags && !project.tech_stack.is_empty() {
                    println!("   {}", project.tech_stack.join(", "));
                }

                println!("   {}", project.repo_url);
                if let Some(ref live) = project.live_url {
                    println!("   live: {}", live);
                }
                println!();
            }

            let label = if results.len() == 1 { "project" } else { "projects" };
            eprintln!("Showing {} {}", results.len(), label);
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
