// 📊 Ticket Summary - Aggregation over normalized tickets
// Counts per category/priority/status plus the open/closed partition

use crate::ticket::Ticket;

// ============================================================================
// ORDERED COUNTER
// ============================================================================

/// Counter that remembers first-seen order of its labels.
///
/// The report wants counts in descending order with ties broken by the order
/// labels first appeared in the input. Labels accumulate in a Vec so the
/// first-seen order survives; each breakdown has at most ten distinct labels.
#[derive(Debug, Clone, Default)]
pub struct OrderedCounter {
    entries: Vec<(String, usize)>,
}

impl OrderedCounter {
    pub fn new() -> Self {
        OrderedCounter { entries: Vec::new() }
    }

    /// Count one occurrence of a label.
    pub fn bump(&mut self, label: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| name == label) {
            entry.1 += 1;
        } else {
            self.entries.push((label.to_string(), 1));
        }
    }

    /// Entries in descending count order, ties in first-seen order.
    /// `sort_by` is stable, so equal counts keep their accumulation order.
    pub fn ranked(&self) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TICKET SUMMARY
// ============================================================================

/// Aggregate view of one run: per-field tallies and the status partition.
///
/// Built in a single pass over already normalized and categorized tickets.
/// An empty input produces an all-empty summary; nothing here can fail.
#[derive(Debug, Clone, Default)]
pub struct TicketSummary {
    pub total: usize,
    pub by_category: OrderedCounter,
    pub by_priority: OrderedCounter,
    pub by_status: OrderedCounter,

    /// Open tickets in input order
    pub open_tickets: Vec<Ticket>,

    /// Closed tickets in input order
    pub closed_tickets: Vec<Ticket>,
}

impl TicketSummary {
    /// Aggregate a sequence of tickets. Each ticket lands in exactly one of
    /// the two status partitions.
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let mut summary = TicketSummary::default();

        for ticket in tickets {
            summary.total += 1;
            summary.by_category.bump(&ticket.category);
            summary.by_priority.bump(ticket.priority.as_str());
            summary.by_status.bump(ticket.status.as_str());

            if ticket.status.is_open() {
                summary.open_tickets.push(ticket.clone());
            } else {
                summary.closed_tickets.push(ticket.clone());
            }
        }

        summary
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
    fn test_counter_ranked_descending_with_first_seen_ties() {
        let mut counter = OrderedCounter::new();
        counter.bump("Printing");
        counter.bump("Hardware");
        counter.bump("Hardware");
        counter.bump("Software");

        let ranked = counter.ranked();
        assert_eq!(ranked[0], ("Hardware".to_string(), 2));
        // Printing and Software tie at 1; Printing was seen first
        assert_eq!(ranked[1], ("Printing".to_string(), 1));
        assert_eq!(ranked[2], ("Software".to_string(), 1));
    }

    #[test]
    fn test_counts_sum_to_total() {
        let tickets = vec![
            ticket("1", "Cannot reset my password", "High", "Open"),
            ticket("2", "Printer offline", "Low", "Closed"),
            ticket("3", "VPN timeout", "", "close"),
            ticket("4", "New monitor flickering", "high", "open"),
        ];

        let summary = TicketSummary::from_tickets(&tickets);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.by_category.total(), 4);
        assert_eq!(summary.by_priority.total(), 4);
        assert_eq!(summary.by_status.total(), 4);
        assert_eq!(
            summary.open_tickets.len() + summary.closed_tickets.len(),
            summary.total
        );
    }

    #[test]
    fn test_partition_preserves_input_order() {
        let tickets = vec![
            ticket("10", "Printer offline", "Low", "Open"),
            ticket("11", "VPN timeout", "High", "Closed"),
            ticket("12", "Slow laptop", "Medium", "Open"),
        ];

        let summary = TicketSummary::from_tickets(&tickets);

        let open_ids: Vec<&str> = summary.open_tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(open_ids, vec!["10", "12"]);
        assert_eq!(summary.closed_tickets[0].id, "11");
    }

    #[test]
    fn test_empty_input_yields_empty_summary() {
        let summary = TicketSummary::from_tickets(&[]);

        assert_eq!(summary.total, 0);
        assert!(summary.by_category.is_empty());
        assert!(summary.by_priority.is_empty());
        assert!(summary.by_status.is_empty());
        assert!(summary.open_tickets.is_empty());
        assert!(summary.closed_tickets.is_empty());
    }
}
