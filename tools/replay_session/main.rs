//! Replay a recorded edit-event stream against a reference text
//!
//! Usage:
//!   cargo run -p replay_session -- --text "Hello Vitest" --events session.jsonl
//!   cargo run -p replay_session -- --reference article.txt < session.jsonl
//!
//! Events are JSON Lines in the engine's wire format, one per line:
//!   {"value":"H","kind":"insertText"}
//!   {"value":" ","kind":"insertCompositionText"}

use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use typedrill_core::{CellState, Config, EditEvent, TypingSession};

#[derive(Parser, Debug)]
#[command(name = "replay_session")]
#[command(about = "Replay a recorded edit-event stream against a reference text")]
struct Args {
    /// Path to a file holding the reference text
    #[arg(short, long, conflicts_with = "text")]
    reference: Option<PathBuf>,

    /// Reference text given inline
    #[arg(short, long)]
    text: Option<String>,

    /// JSON Lines file of edit events (defaults to stdin)
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// Session configuration TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress per-edit output, print only the final summary
    #[arg(long)]
    summary_only: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let reference = match (&args.reference, &args.text) {
        (Some(path), None) => std::fs::read_to_string(path)?,
        (None, Some(text)) => text.clone(),
        _ => anyhow::bail!("Provide a reference via --reference <file> or --text <string>"),
    };

    let config = match &args.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => Config::default(),
    };

    let mut session = TypingSession::with_config(&reference, &config);

    let events: Box<dyn BufRead> = match &args.events {
        Some(path) => Box::new(std::io::BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(std::io::stdin().lock()),
    };

    let mut count = 0usize;
    for line in events.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: EditEvent = serde_json::from_str(&line)
            .map_err(|e| anyhow::anyhow!("Bad event on line {}: {}", count + 1, e))?;
        session.apply_edit(&event);
        count += 1;

        if !args.summary_only {
            println!(
                "{:>4}  {:<22} {:<24} {}",
                count,
                event.kind.as_dom_input_type(),
                format!("{:?}", session.buffer()),
                render_cells(session.cells()),
            );
        }
    }

    let summary = serde_json::json!({
        "events": count,
        "buffer": session.buffer(),
        "complete": session.is_complete(),
        "progress": session.progress(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn render_cells(cells: &[CellState]) -> String {
    cells
        .iter()
        .map(|cell| match cell {
            CellState::Initial => '·',
            CellState::Success => '✓',
            CellState::Error => '✗',
        })
        .collect()
}
