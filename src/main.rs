use anyhow::Result;
use clap::{Parser, Subcommand};
use dojo::course::{COURSE, Sequence};
use dojo::progress::{FileBackend, ProgressStore};
use dojo::{App, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dojo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a completion report for the course
    Progress,
    /// Clear all saved progress
    Reset,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dojo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    for problem in COURSE.validate() {
        tracing::warn!("course definition: {problem}");
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Progress) => {
            let progress = open_progress()?;
            print_progress_report(&progress);
        }
        Some(Commands::Reset) => {
            let mut progress = open_progress()?;
            progress.reset();
            println!("Progress cleared.");
        }
        None => {
            // Launch TUI
            let config = Config::load()?;
            let progress = open_progress()?;
            let mut app = App::new(config, progress)?;
            app.run()?;
        }
    }

    Ok(())
}

fn open_progress() -> Result<ProgressStore> {
    let backend = FileBackend::default_location()?;
    Ok(ProgressStore::open(Box::new(backend)))
}

fn print_progress_report(progress: &ProgressStore) {
    let course = &*COURSE;
    println!(
        "{}: {}% complete ({} of {} topics)",
        course.title,
        progress.percentage(course),
        progress.completed_count(course),
        course.topic_count()
    );
    println!();
    let sequence = Sequence::of(course);
    for module in &course.modules {
        println!("  {}", module.title);
        for entry in sequence.entries() {
            if entry.module.id == module.id {
                let mark = if progress.is_completed(&entry.topic.id) { "✓" } else { "○" };
                println!("    {} {:>2}. {}", mark, entry.global_number, entry.topic.title);
            }
        }
    }
}
