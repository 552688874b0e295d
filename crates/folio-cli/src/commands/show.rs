//! Show command - print a single blog post.

use crate::app::App;
use folio_core::Config;

/// Run the show command.
pub fn run(config: Config, slug: &str) -> anyhow::Result<()> {
    let app = App::new(config)?;

    let post = app.catalog.require_post(slug)?;

    println!("{}", post.title);
    println!(
        "{} · {} · {}",
        post.date.format("%B %-d, %Y"),
        post.read_time,
        post.tags.join(", ")
    );
    println!();

    match post.body {
        // Bodies are raw markdown; printed as-is
        Some(ref body) => println!("{}", body.trim()),
        None => {
            println!("{}", post.description);
            println!();
            println!("(full article not available)");
        }
    }

    Ok(())
}
