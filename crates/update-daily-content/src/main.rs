use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use shared::dates::{german_long_date, today_in};
use shared::{Catalog, Config, DailyUpdate, ReplayPolicy};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "update-daily-content")]
#[command(about = "Publish today's history articles as HTML pages and a PDF summary")]
struct Args {
    /// Directory for index.html, tageschronik.html and dokumentation.pdf
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// History JSON file (defaults to daily_history.json in the output directory)
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Maximum number of days kept in the history file
    #[arg(long)]
    max_history: Option<usize>,

    /// Publish for this date (YYYY-MM-DD) instead of today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Pick new articles even if today already has a selection
    #[arg(short, long)]
    force_new: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = Config::from_env()?;

    if let Some(output_dir) = args.output_dir {
        config = config.with_output_dir(output_dir);
    }
    if let Some(history_file) = args.history_file {
        config = config.with_history_file(history_file);
    }
    if let Some(max_history) = args.max_history {
        config.max_history = max_history;
    }
    if args.force_new {
        config.replay = ReplayPolicy::ForceNew;
    }
    config.validate()?;

    let date = args.date.unwrap_or_else(|| today_in(config.timezone));
    println!("📅 Daily content for {}", german_long_date(date));

    let catalog = Catalog::builtin();
    let report = DailyUpdate::new(&config, &catalog)
        .run(date)
        .context("Daily update failed")?;

    if report.selection.fresh {
        println!("\n✓ Picked new articles:");
    } else {
        println!("\n✓ Reusing today's selection:");
    }
    for selected in &report.selection.articles {
        println!(
            "  {}: {} ({})",
            selected.category, selected.article.title, selected.article.slug
        );
    }

    println!(
        "\n🗂  History saved to: {} ({} days kept)",
        report.history_file.display(),
        report.history_len
    );

    println!("\n✅ Files written:");
    for path in &report.files {
        println!("  {}", path.display());
    }

    Ok(())
}
