//! Work command - print the engineering expertise areas.

use crate::app::App;
use crate::OutputFormat;
use folio_core::Config;

/// Run the work command.
pub fn run(config: Config, output: OutputFormat) -> anyhow::Result<()> {
    let app = App::new(config)?;
    let areas = app.catalog.work_areas();

    if let OutputFormat::Json = output {
        println!("{}", serde_json::to_string_pretty(areas)?);
        return Ok(());
    }

    println!("Engineering Expertise");
    println!("=====================");

    for area in areas {
        println!();
        println!("{}", area.title);
        println!("{}", "-".repeat(area.title.len()));
        println!("{}", area.description);
        for highlight in &area.highlights {
            println!("  • {}", highlight);
        }
        if app.config.ui.show_tags {
            println!("  [{}]", area.technologies.join(", "));
        }
    }

    Ok(())
}
