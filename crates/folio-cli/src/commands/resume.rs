//! Resume command - print the profile record.

use crate::app::App;
use crate::OutputFormat;
use folio_core::Config;

/// Run the resume command.
pub fn run(config: Config, output: OutputFormat) -> anyhow::Result<()> {
    let app = App::new(config)?;
    let profile = app.catalog.profile();

    if let OutputFormat::Json = output {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    println!("{}", profile.name);
    println!("{}", profile.title);
    println!("{}", profile.subtitle);
    println!();
    println!("  {}", profile.contact.email);
    println!("  {}", profile.contact.location);
    println!("  {}", profile.contact.linkedin);
    println!("  {}", profile.contact.github);

    println!();
    println!("Professional Summary");
    println!("--------------------");
    println!("{}", profile.summary);

    println!();
    println!("Skills");
    println!("------");
    for group in &profile.skills {
        println!("  {}: {}", group.category, group.items.join(", "));
    }

    println!();
    println!("Experience");
    println!("----------");
    for entry in &profile.experience {
        println!("  {} - {} ({})", entry.title, entry.engagement, entry.period);
        for highlight in &entry.highlights {
            println!("    • {}", highlight);
        }
    }

    println!();
    println!("Education");
    println!("---------");
    for entry in &profile.education {
        println!("  {}, {}", entry.degree, entry.field);
        println!("  {} ({})", entry.institution, entry.year);
    }

    if !profile.certifications.is_empty() {
        println!();
        println!("Certifications");
        println!("--------------");
        for cert in &profile.certifications {
            println!("  • {}", cert);
        }
    }

    Ok(())
}
