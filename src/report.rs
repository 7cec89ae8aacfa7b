// 📄 Summary Report - Human-readable aggregate view
// Renders one TicketSummary into the summary.txt text layout

use std::fmt::Write as _;

use crate::aggregate::TicketSummary;
use crate::ticket::Ticket;

/// Title line of the summary report.
pub const REPORT_TITLE: &str = "IT Ticket Analyzer Summary";

// ============================================================================
// RENDERING
// ============================================================================

/// Render the full text report.
///
/// Sections, in order: title, total count, category/priority/status
/// breakdowns (descending by count, ties in first-seen order), then the open
/// and closed ticket listings in input order. Section headers are always
/// rendered; an empty store produces a complete report with zero entries.
pub fn render(summary: &TicketSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", REPORT_TITLE);
    let _ = writeln!(out);
    let _ = writeln!(out, "Total tickets: {}", summary.total);
    let _ = writeln!(out);

    write_counts(&mut out, "Tickets by Category:", &summary.by_category.ranked());
    let _ = writeln!(out);
    write_counts(&mut out, "Tickets by Priority:", &summary.by_priority.ranked());
    let _ = writeln!(out);
    write_counts(&mut out, "Tickets by Status:", &summary.by_status.ranked());
    let _ = writeln!(out);

    write_ticket_list(&mut out, "Open Tickets:", &summary.open_tickets);
    let _ = writeln!(out);
    write_ticket_list(&mut out, "Closed Tickets:", &summary.closed_tickets);

    out
}

fn write_counts(out: &mut String, header: &str, entries: &[(String, usize)]) {
    let _ = writeln!(out, "{}", header);
    for (label, count) in entries {
        let _ = writeln!(out, "- {}: {}", label, count);
    }
}

fn write_ticket_list(out: &mut String, header: &str, tickets: &[Ticket]) {
    let _ = writeln!(out, "{}", header);
    for ticket in tickets {
        let _ = writeln!(
            out,
            "- #{} — {} | Priority: {} | Status: {} | Category: {}",
            ticket.id,
            ticket.subject,
            ticket.priority.as_str(),
            ticket.status.as_str(),
            ticket.category,
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::Ticket;

    fn ticket(id: &str, subject: &str, priority: &str, status: &str) -> Ticket {
        Ticket::from_raw(
            id.to_string(),
            subject.to_string(),
            String::new(),
            Some(priority),
            Some(status),
        )
    }

    #[test]
    fn test_report_section_order() {
        let tickets = vec![
            ticket("1", "Cannot reset my password", "High", "Open"),
            ticket("2", "Printer offline", "Low", "Closed"),
        ];
        let summary = TicketSummary::from_tickets(&tickets);
        let report = render(&summary);

        let title_pos = report.find(REPORT_TITLE).unwrap();
        let total_pos = report.find("Total tickets: 2").unwrap();
        let category_pos = report.find("Tickets by Category:").unwrap();
        let priority_pos = report.find("Tickets by Priority:").unwrap();
        let status_pos = report.find("Tickets by Status:").unwrap();
        let open_pos = report.find("Open Tickets:").unwrap();
        let closed_pos = report.find("Closed Tickets:").unwrap();

        assert!(title_pos < total_pos);
        assert!(total_pos < category_pos);
        assert!(category_pos < priority_pos);
        assert!(priority_pos < status_pos);
        assert!(status_pos < open_pos);
        assert!(open_pos < closed_pos);
    }

    #[test]
    fn test_counts_are_descending() {
        let tickets = vec![
            ticket("1", "Printer offline", "Low", "Open"),
            ticket("2", "Print job stuck", "Low", "Open"),
            ticket("3", "VPN timeout", "High", "Open"),
        ];
        let summary = TicketSummary::from_tickets(&tickets);
        let report = render(&summary);

        let printing_pos = report.find("- Printing: 2").unwrap();
        let vpn_pos = report.find("- VPN: 1").unwrap();
        assert!(printing_pos < vpn_pos);
    }

    #[test]
    fn test_ticket_line_format() {
        let tickets = vec![ticket("7", "Cannot reset my password", "High", "Open")];
        let summary = TicketSummary::from_tickets(&tickets);
        let report = render(&summary);

        assert!(report.contains(
            "- #7 — Cannot reset my password | Priority: High | Status: Open | Category: Login/Account"
        ));
    }

    #[test]
    fn test_empty_summary_renders_complete_report() {
        let summary = TicketSummary::from_tickets(&[]);
        let report = render(&summary);

        assert!(report.contains(REPORT_TITLE));
        assert!(report.contains("Total tickets: 0"));
        assert!(report.contains("Tickets by Category:"));
        assert!(report.contains("Open Tickets:"));
        assert!(report.contains("Closed Tickets:"));
    }
}
