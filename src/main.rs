use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ticket_analyzer::{append_ticket, render_report, TicketDraft, TicketStore, TicketSummary};

const INPUT_CSV: &str = "tickets.csv";
const OUTPUT_CLEANED: &str = "tickets_with_category.csv";
const OUTPUT_SUMMARY: &str = "summary.txt";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let (mode, input) = match args.get(1).map(String::as_str) {
        Some("add") => ("add", args.get(2)),
        Some("analyze") => ("analyze", args.get(2)),
        Some(_) => ("analyze", args.get(1)),
        None => ("analyze", None),
    };
    let input: PathBuf = input.map(PathBuf::from).unwrap_or_else(|| INPUT_CSV.into());

    if mode == "add" {
        run_add(&input)?;
    }

    run_analyze(&input)
}

/// Prompt for one new ticket on stdin and append it to the store before the
/// analysis pass.
fn run_add(input: &Path) -> Result<()> {
    println!("📥 New ticket intake");

    let draft = TicketDraft {
        subject: prompt("Subject: ")?,
        description: prompt("Description: ")?,
        priority: prompt("Priority (High/Medium/Low): ")?,
        status: prompt("Status (Open/Closed): ")?,
    };

    // Allocate the id from the current store contents; an absent store
    // starts at 1 and gets created by the append.
    let next_id = match TicketStore::load(input) {
        Ok(store) => store.next_id(),
        Err(_) => 1,
    };

    let ticket = draft.into_ticket(next_id);
    append_ticket(input, &ticket)?;
    println!("✓ Ticket #{} added to {}", ticket.id, input.display());

    Ok(())
}

fn run_analyze(input: &Path) -> Result<()> {
    println!("🎫 IT Ticket Analyzer");

    // Fatal before any output is produced
    let store = TicketStore::load(input)?;
    println!("✓ Loaded {} tickets from {}", store.len(), input.display());

    let summary = TicketSummary::from_tickets(store.tickets());

    store.export(OUTPUT_CLEANED)?;
    println!("✓ Wrote enriched export: {}", OUTPUT_CLEANED);

    fs::write(OUTPUT_SUMMARY, render_report(&summary))
        .with_context(|| format!("failed to write report: {}", OUTPUT_SUMMARY))?;
    println!("✓ Wrote summary report: {}", OUTPUT_SUMMARY);

    println!(
        "✓ {} open / {} closed across {} categories",
        summary.open_tickets.len(),
        summary.closed_tickets.len(),
        summary.by_category.ranked().len()
    );

    Ok(())
}

fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    let trimmed = line.trim();
    Ok(if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    })
}
