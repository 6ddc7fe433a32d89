//! Area panel view builder.
//!
//! Flattens ordered [`AreaGroup`]s into a line list the TUI can render
//! directly, with a parallel index of which lines hold selectable customers.

use crate::model::AreaGroup;
use crate::util::money::format_cents;
use crate::view::common::RowStyleClass;
use crate::view::customers::severity_class;
use crate::view::table::balance_severity;

/// One rendered line of the area panel.
#[derive(Debug, Clone)]
pub enum AreaLine {
    /// Area heading with customer count and summed balance.
    Heading { text: String },
    /// A selectable customer entry.
    Customer {
        id: i64,
        name: String,
        text: String,
        style: RowStyleClass,
    },
    /// Spacer between groups.
    Blank,
}

/// The full panel: lines in render order plus the indices of customer lines.
#[derive(Debug, Clone, Default)]
pub struct AreaPanelView {
    pub lines: Vec<AreaLine>,
    /// Indices into `lines` holding `AreaLine::Customer`, in render order.
    pub selectable: Vec<usize>,
}

impl AreaPanelView {
    /// The customer at selection position `pos`, if any.
    pub fn customer_at(&self, pos: usize) -> Option<(i64, &str)> {
        let line = self.selectable.get(pos).and_then(|&i| self.lines.get(i))?;
        match line {
            AreaLine::Customer { id, name, .. } => Some((*id, name.as_str())),
            _ => None,
        }
    }
}

/// Builds the panel from groups already in display order
/// (largest first, ties by name).
pub fn build_area_panel(groups: &[AreaGroup]) -> AreaPanelView {
    let mut lines = Vec::new();
    let mut selectable = Vec::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(AreaLine::Blank);
        }
        lines.push(AreaLine::Heading {
            text: format!(
                "{}: {} customers, {} owed",
                group.name,
                group.customers.len(),
                format_cents(group.total_cents())
            ),
        });
        for c in &group.customers {
            let address = c.address.as_deref().unwrap_or("no address");
            let days = match c.days_since {
                Some(d) => format!("{}d since visit", d),
                None => "never visited".to_string(),
            };
            selectable.push(lines.len());
            lines.push(AreaLine::Customer {
                id: c.id,
                name: c.name.clone(),
                text: format!(
                    "  {}  {}  {}  {}",
                    c.name,
                    address,
                    format_cents(c.balance_cents),
                    days
                ),
                style: severity_class(balance_severity(c.balance_cents)),
            });
        }
    }

    AreaPanelView { lines, selectable }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AreaCustomer;

    fn group(name: &str, customers: Vec<AreaCustomer>) -> AreaGroup {
        AreaGroup {
            name: name.to_string(),
            customers,
        }
    }

    fn area_customer(id: i64, name: &str, balance_cents: i64) -> AreaCustomer {
        AreaCustomer {
            id,
            name: name.to_string(),
            address: None,
            balance_cents,
            days_since: Some(3),
        }
    }

    #[test]
    fn selectable_indices_point_at_customer_lines() {
        let groups = vec![
            group(
                "Downtown",
                vec![area_customer(1, "Maple", 500), area_customer(2, "Oak", 0)],
            ),
            group("Westside", vec![area_customer(3, "Pine", 12_000)]),
        ];
        let panel = build_area_panel(&groups);
        assert_eq!(panel.selectable.len(), 3);
        assert_eq!(panel.customer_at(0), Some((1, "Maple")));
        assert_eq!(panel.customer_at(2), Some((3, "Pine")));
        assert_eq!(panel.customer_at(3), None);
    }

    #[test]
    fn headings_summarize_count_and_total() {
        let groups = vec![group(
            "Downtown",
            vec![area_customer(1, "Maple", 500), area_customer(2, "Oak", 1_500)],
        )];
        let panel = build_area_panel(&groups);
        match &panel.lines[0] {
            AreaLine::Heading { text } => {
                assert_eq!(text, "Downtown: 2 customers, $20.00 owed");
            }
            other => panic!("expected heading, got {:?}", other),
        }
    }

    #[test]
    fn empty_groups_yield_empty_panel() {
        let panel = build_area_panel(&[]);
        assert!(panel.lines.is_empty());
        assert!(panel.selectable.is_empty());
    }
}
