//! Output rendering for CLI commands.

use comfy_table::{Cell, CellAlignment, Table};
use costbench_core::Item;
use serde::Serialize;

/// Pretty JSON, one value per invocation.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Ranked table in list order.
pub fn items_table(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items yet.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Rank",
        "ID",
        "Description",
        "Cost",
        "Severity",
        "Frequency",
        "Benefit",
        "Cost Score",
        "Net",
    ]);

    for (rank, item) in items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(item.id).set_alignment(CellAlignment::Right),
            Cell::new(&item.description),
            Cell::new(format!("${}", item.cost)).set_alignment(CellAlignment::Right),
            Cell::new(item.severity).set_alignment(CellAlignment::Right),
            Cell::new(item.frequency).set_alignment(CellAlignment::Right),
            Cell::new(item.benefit_score).set_alignment(CellAlignment::Right),
            Cell::new(item.cost_score).set_alignment(CellAlignment::Right),
            Cell::new(item.net_score).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::items_table;
    use costbench_core::{Item, NewItem};

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(items_table(&[]), "No items yet.");
    }

    #[test]
    fn table_contains_item_fields() {
        let input = NewItem::new("Leaky faucet", 50.0, 3, 5);
        let item = Item::from_parts(1, &input, input.scores(), 0);

        let rendered = items_table(&[item]);
        assert!(rendered.contains("Leaky faucet"));
        assert!(rendered.contains("$50"));
        assert!(rendered.contains("Net"));
    }
}
