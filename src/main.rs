//! man-to-anki CLI
//!
//! The entry point for the flashcard tool. Renders the requested man page
//! to HTML inside the Anki collection, extracts card text from it, and
//! adds notes through AnkiConnect.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use man_to_anki::anki::client::AnkiHttpClient;
use man_to_anki::anki::notes;
use man_to_anki::config;
use man_to_anki::logging;
use man_to_anki::man::{extract, source};
use man_to_anki::prompts;

/// Automatically create Anki flashcards for a given man page.
#[derive(Parser, Debug)]
#[command(
    name = "man-to-anki",
    version,
    about = "Automatically create Anki flashcards for a given man page"
)]
struct Cli {
    /// The name of the man page
    page: String,

    /// The section number for the man page
    #[arg(value_parser = clap::value_parser!(u8).range(1..=8))]
    section: u8,

    /// Create a flashcard for a short description of the man page
    #[arg(short, long)]
    description: bool,

    /// Create flashcards for command options
    #[arg(short, long = "option", num_args = 1.., value_name = "OPTION")]
    option: Vec<String>,

    /// Indicate that this is a man page for a subcommand such as git-commit
    #[arg(long)]
    subcommand: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    tracing::debug!("CLI args: {:?}", cli);

    let config = config::load_config()?;

    let html_path = source::create_man_html_file(&config, cli.section, &cli.page)?;
    println!(
        "Created (or updated) an html file for {}({}) at: {}",
        cli.page,
        cli.section,
        html_path.display()
    );

    // A subcommand page like "git-commit" names the command "git commit"
    // on cards; the HTML artifact keeps the hyphenated name.
    let command = if cli.subcommand {
        cli.page.replace('-', " ")
    } else {
        cli.page.clone()
    };

    let html = fs::read_to_string(&html_path)
        .with_context(|| format!("Failed to read {}", html_path.display()))?;
    let source_name = source::html_file_name(cli.section, &cli.page);

    let client = AnkiHttpClient::new(config.anki_connect_url.clone());
    let mut note_ids: Vec<i64> = Vec::new();

    if cli.description {
        let one_liner = match extract::one_liner(&html) {
            Some(text) => text,
            None => prompts::input_one_liner()?,
        };

        let note_id =
            notes::add_description_note(&client, &config, &one_liner, &command, &source_name)
                .await?;
        println!(
            "Added a one-liner note ({}) for the man page: {}({})",
            note_id, command, cli.section
        );
        note_ids.push(note_id);
    }

    for raw in &cli.option {
        let option = extract::normalize_option(raw);
        let entry = extract::find_option(&html, &option);

        let title = match entry.title {
            Some(title) => title,
            None => prompts::input_option_title(&option)?,
        };
        let description = match entry.description {
            Some(description) => description,
            None => prompts::input_option_description(&option)?,
        };

        let note_id =
            notes::add_option_note(&client, &config, &description, &title, &command, &source_name)
                .await?;
        println!(
            "Added an option note ({}) for {} of {}({})",
            note_id, option, command, cli.section
        );
        note_ids.push(note_id);
    }

    if !note_ids.is_empty() {
        notes::gui_browse_notes(&client, &note_ids).await?;
    }

    Ok(())
}
