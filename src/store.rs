// 🗄️ Ticket Store - CSV backing file
// Load, enriched export, next-id allocation, and single-ticket append

use anyhow::{bail, Context, Result};
use std::fs::OpenOptions;
use std::path::Path;

use crate::ticket::Ticket;

/// Base column set of the backing store, in canonical order. Input files may
/// carry additional columns; those pass through into the export unchanged.
pub const BASE_HEADERS: &[&str] = &["id", "subject", "description", "priority", "status"];

/// Column added (or overwritten) by the export.
pub const CATEGORY_HEADER: &str = "category";

// ============================================================================
// TICKET STORE
// ============================================================================

/// In-memory view of one backing file: the header row as read, plus every
/// ticket already normalized and categorized.
///
/// Keeping the header list here is what lets an empty store still export a
/// well-formed file; column names are never derived from the first record.
#[derive(Debug, Clone)]
pub struct TicketStore {
    /// Input headers in original order
    headers: Vec<String>,

    /// Headers outside the base schema (and outside `category`), original order
    extra_headers: Vec<String>,

    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Read the backing file. The file must exist (a read-only run against a
    /// missing store is fatal, before any output is produced) and must carry
    /// a header row. Every row is normalized and categorized on read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            bail!("ticket store not found: {}", path.display());
        }

        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open ticket store: {}", path.display()))?;

        let headers: Vec<String> = reader
            .headers()
            .context("failed to read header row")?
            .iter()
            .map(|h| h.to_string())
            .collect();

        // A zero-byte file has no header row; treat it as an empty store
        // with the base schema so export still writes a header.
        let headers = if headers.is_empty() {
            BASE_HEADERS.iter().map(|h| h.to_string()).collect()
        } else {
            headers
        };

        let extra_headers: Vec<String> = headers
            .iter()
            .filter(|h| !BASE_HEADERS.contains(&h.as_str()) && h.as_str() != CATEGORY_HEADER)
            .cloned()
            .collect();

        let column = |name: &str| headers.iter().position(|h| h == name);
        let id_col = column("id");
        let subject_col = column("subject");
        let description_col = column("description");
        let priority_col = column("priority");
        let status_col = column("status");
        let extra_cols: Vec<usize> = extra_headers
            .iter()
            .filter_map(|h| headers.iter().position(|header| header == h))
            .collect();

        let mut tickets = Vec::new();

        for (row_number, record) in reader.records().enumerate() {
            let record = record
                .with_context(|| format!("failed to read record {}", row_number + 1))?;

            let field = |col: Option<usize>| {
                col.and_then(|i| record.get(i)).unwrap_or_default().to_string()
            };

            let mut ticket = Ticket::from_raw(
                field(id_col),
                field(subject_col),
                field(description_col),
                priority_col.and_then(|i| record.get(i)),
                status_col.and_then(|i| record.get(i)),
            );
            ticket.extra = extra_cols
                .iter()
                .map(|&i| record.get(i).unwrap_or_default().to_string())
                .collect();

            tickets.push(ticket);
        }

        Ok(TicketStore {
            headers,
            extra_headers,
            tickets,
        })
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Next ticket id: one greater than the largest numeric id in the store,
    /// or 1 when the store is empty. Non-numeric ids are skipped, not errors.
    pub fn next_id(&self) -> u64 {
        self.tickets
            .iter()
            .filter_map(|t| t.id.trim().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Write the enriched export: the original columns plus `category`,
    /// header row always included, one row per ticket in input order.
    /// Priority/status are written in normalized form; an input `category`
    /// column is overwritten in place rather than duplicated.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create export: {}", path.display()))?;

        let mut out_headers = self.headers.clone();
        if !out_headers.iter().any(|h| h == CATEGORY_HEADER) {
            out_headers.push(CATEGORY_HEADER.to_string());
        }

        writer
            .write_record(&out_headers)
            .context("failed to write export header")?;

        for ticket in &self.tickets {
            let mut extra = ticket.extra.iter();
            let row: Vec<&str> = out_headers
                .iter()
                .map(|header| match header.as_str() {
                    "id" => ticket.id.as_str(),
                    "subject" => ticket.subject.as_str(),
                    "description" => ticket.description.as_str(),
                    "priority" => ticket.priority.as_str(),
                    "status" => ticket.status.as_str(),
                    CATEGORY_HEADER => ticket.category.as_str(),
                    _ => extra.next().map(|v| v.as_str()).unwrap_or_default(),
                })
                .collect();

            writer.write_record(&row).context("failed to write export row")?;
        }

        writer.flush().context("failed to flush export")?;
        Ok(())
    }
}

// ============================================================================
// INTAKE APPEND
// ============================================================================

/// Append one ticket to the backing store, creating the file with the base
/// header row when it does not exist yet. An existing store keeps its own
/// header; extra columns are filled with empty values for the new row.
pub fn append_ticket<P: AsRef<Path>>(path: P, ticket: &Ticket) -> Result<()> {
    let path = path.as_ref();

    let headers: Vec<String> = if path.exists() {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open ticket store: {}", path.display()))?;
        let existing: Vec<String> = reader
            .headers()
            .context("failed to read header row")?
            .iter()
            .map(|h| h.to_string())
            .collect();

        if existing.is_empty() {
            BASE_HEADERS.iter().map(|h| h.to_string()).collect()
        } else {
            existing
        }
    } else {
        BASE_HEADERS.iter().map(|h| h.to_string()).collect()
    };

    let file_is_new = !path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open ticket store for append: {}", path.display()))?;

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    if file_is_new {
        writer
            .write_record(&headers)
            .context("failed to write header row")?;
    }

    let row: Vec<&str> = headers
        .iter()
        .map(|header| match header.as_str() {
            "id" => ticket.id.as_str(),
            "subject" => ticket.subject.as_str(),
            "description" => ticket.description.as_str(),
            "priority" => ticket.priority.as_str(),
            "status" => ticket.status.as_str(),
            CATEGORY_HEADER => ticket.category.as_str(),
            _ => "",
        })
        .collect();

    writer.write_record(&row).context("failed to append ticket")?;
    writer.flush().context("failed to flush ticket store")?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
