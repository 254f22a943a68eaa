use anyhow::Result;
use clap::Parser;
use shared::dates::german_long_date;
use shared::{ArticleSelector, Catalog, Config, HistoryStore};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "daily-history")]
#[command(about = "Show past daily selections and how many unused articles are left")]
struct Args {
    /// History JSON file (defaults to the configured location)
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Number of most recent days to list
    #[arg(short, long, default_value = "10")]
    limit: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let history_file = match args.history_file {
        Some(path) => path,
        None => Config::from_env()?.history_file,
    };

    let store = HistoryStore::load(&history_file);
    let catalog = Catalog::builtin();

    println!("📖 History file: {}", history_file.display());

    if store.history.is_empty() {
        println!("\nNo days recorded yet.");
    } else {
        let shown = args.limit.min(store.history.len());
        println!(
            "\nLast {} of {} recorded days (newest first):\n",
            shown,
            store.history.len()
        );
        for entry in store.history.iter().rev().take(shown) {
            println!("  {}  ({})", entry.date, german_long_date(entry.date));
            for slug in &entry.slugs {
                match catalog.find(slug) {
                    Some((category, article)) => {
                        println!("      {}: {}", category, article.title)
                    }
                    None => println!("      ? {} (no longer in catalog)", slug),
                }
            }
        }
    }

    println!(
        "\n🗂  {} of {} articles used so far",
        store.used_slugs.len(),
        catalog.len()
    );

    println!("\nUnused articles per category:");
    let mut exhausted = 0;
    for (category, left) in ArticleSelector::new(&catalog).remaining(&store) {
        if left == 0 {
            exhausted += 1;
            println!("  ✗ {}: none left", category);
        } else {
            println!("  {}: {}", category, left);
        }
    }

    if exhausted > 0 {
        println!(
            "\n⚠ {} categor{} exhausted: the next fresh pick will fail.",
            exhausted,
            if exhausted == 1 { "y is" } else { "ies are" }
        );
    }

    Ok(())
}
