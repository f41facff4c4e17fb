//! Tabular rendering of the pairing table.
//!
//! Presentation only: the assignment list is already validated by the time
//! it reaches this module.

use crate::core::assignment::Assignment;

const ORDER_HEADER: &str = "Order";
const SELECTOR_HEADER: &str = "Selector";
const PRESENTER_HEADER: &str = "Presenter";

/// Render assignments as a right-aligned text table.
///
/// Name columns share the width of the widest participant name (or the
/// header, whichever is wider) so the arrows line up down the page.
pub fn render_table(assignments: &[Assignment]) -> String {
    let widest = assignments
        .iter()
        .flat_map(|a| [a.selector.len(), a.presenter.len()])
        .max()
        .unwrap_or(0);
    let selector_width = widest.max(SELECTOR_HEADER.len());
    let presenter_width = widest.max(PRESENTER_HEADER.len());
    let order_width = ORDER_HEADER.len();

    let mut lines = Vec::new();
    lines.push(format!(
        "{ORDER_HEADER} {SELECTOR_HEADER:>selector_width$}    {PRESENTER_HEADER:>presenter_width$}"
    ));
    lines.push("=".repeat(order_width + selector_width + presenter_width + 5));

    for assignment in assignments {
        let order = format!("{}.", assignment.order);
        lines.push(format!(
            "{order:>order_width$} {selector:>selector_width$} -> {presenter:>presenter_width$}",
            selector = assignment.selector,
            presenter = assignment.presenter,
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(order: usize, selector: &str, presenter: &str) -> Assignment {
        Assignment {
            order,
            selector: selector.to_string(),
            presenter: presenter.to_string(),
        }
    }

    #[test]
    fn renders_short_names_against_header_widths() {
        let assignments = vec![
            assignment(1, "A", "B"),
            assignment(2, "B", "A"),
            assignment(3, "C", "D"),
            assignment(4, "D", "C"),
        ];
        let expected = "\
Order Selector    Presenter
===========================
   1.        A ->         B
   2.        B ->         A
   3.        C ->         D
   4.        D ->         C
";
        assert_eq!(render_table(&assignments), expected);
    }

    #[test]
    fn widens_columns_to_the_longest_name() {
        let assignments = vec![
            assignment(1, "Konstantinos", "Mara"),
            assignment(2, "Mara", "Konstantinos"),
        ];
        let rendered = render_table(&assignments);
        let lines: Vec<&str> = rendered.lines().collect();

        // Header, separator, and every row share one width.
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
        assert!(lines[1].chars().all(|ch| ch == '='));
        assert!(lines[2].contains("Konstantinos -> "));
        assert!(lines[2].ends_with("Mara"));
    }
}
