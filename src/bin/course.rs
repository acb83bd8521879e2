//! Lists the chapters of the course and how to run their examples.
//!
//! Run with: cargo run --bin course -- list
//!           cargo run --bin course -- count
//!           cargo run --bin course -- show 8

use anyhow::Result;
use clap::{Parser, Subcommand};
use fundamentals::{discover, find, total_examples, Chapter, CourseManifest};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "course", about = "Browse the chapters of the course")]
struct Cli {
    /// Path to the course manifest
    #[arg(long, default_value = "course.toml")]
    manifest: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every chapter with the run command of each example
    List,
    /// Print the number of examples per chapter and the total
    Count,
    /// Print a single chapter
    Show { number: u32 },
}

fn print_chapter(chapter: &Chapter) {
    println!("{:02}. {} ({})", chapter.number, chapter.title, chapter.crate_name);
    for example in &chapter.examples {
        println!("    {}", chapter.run_command(example));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let manifest = CourseManifest::load(&cli.manifest)?;
    let root = cli
        .manifest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let chapters = discover(root, &manifest)?;

    match cli.command {
        Command::List => {
            println!("{}\n", manifest.title);
            for chapter in &chapters {
                print_chapter(chapter);
            }
        }
        Command::Count => {
            for chapter in &chapters {
                println!("{:02}. {:<28} {}", chapter.number, chapter.title, chapter.examples.len());
            }
            println!("\nTotal examples: {}", total_examples(&chapters));
        }
        Command::Show { number } => print_chapter(find(&chapters, number)?),
    }

    Ok(())
}
