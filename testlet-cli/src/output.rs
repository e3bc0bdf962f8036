/// Output formatting: terminal table and JSON.
use serde::Serialize;
use std::fmt::Write;
use testlet_core::{Item, LEADING_PRETEST_COUNT};

#[derive(Serialize)]
struct JsonItem<'a> {
    position: usize,
    item_id: &'a str,
    item_type: &'static str,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    testlet_id: &'a str,
    seed: u64,
    orderings: Vec<Vec<JsonItem<'a>>>,
}

/// Render randomized orderings as a table. Rows inside the leading pretest
/// block are marked with `*`.
pub fn format_table(testlet_id: &str, seed: u64, orderings: &[Vec<Item>]) -> String {
    let id_width = orderings
        .iter()
        .flatten()
        .map(|item| item.id.len())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Item"

    let mut out = String::new();
    for (n, ordering) in orderings.iter().enumerate() {
        if orderings.len() > 1 {
            let _ = writeln!(out, "Ordering {}/{}", n + 1, orderings.len());
        }
        let _ = writeln!(out, " # | {:<id_width$} | Type        | Lead", "Item");
        let _ = writeln!(out, "---|-{}-|-------------|-----", "-".repeat(id_width));
        for (i, item) in ordering.iter().enumerate() {
            let lead = if i < LEADING_PRETEST_COUNT { "*" } else { "" };
            let _ = writeln!(out, "{:>2} | {:<id_width$} | {:<11} | {}", i + 1, item.id, item.kind.as_str(), lead);
        }
        out.push('\n');
    }

    let _ = write!(
        out,
        "Testlet {testlet_id}: {} ordering(s), {} leading pretest items, seed {seed}",
        orderings.len(),
        LEADING_PRETEST_COUNT,
    );
    out
}

/// Render randomized orderings as pretty JSON.
pub fn format_json(testlet_id: &str, seed: u64, orderings: &[Vec<Item>]) -> String {
    let output = JsonOutput {
        testlet_id,
        seed,
        orderings: orderings
            .iter()
            .map(|ordering| {
                ordering
                    .iter()
                    .enumerate()
                    .map(|(i, item)| JsonItem {
                        position: i + 1,
                        item_id: &item.id,
                        item_type: item.kind.as_str(),
                    })
                    .collect()
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| crate::bail(format!("Failed to serialize output: {e}")))
}

pub fn print_table(testlet_id: &str, seed: u64, orderings: &[Vec<Item>]) {
    println!("{}", format_table(testlet_id, seed, orderings));
}

pub fn print_json(testlet_id: &str, seed: u64, orderings: &[Vec<Item>]) {
    println!("{}", format_json(testlet_id, seed, orderings));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordering() -> Vec<Item> {
        vec![
            Item::pretest("Pretest2"),
            Item::pretest("Pretest1"),
            Item::operational("Operational6"),
        ]
    }

    #[test]
    fn test_table_marks_leading_block() {
        let table = format_table("t1", 7, &[ordering()]);
        let rows: Vec<&str> = table.lines().skip(2).take(3).collect();
        assert!(rows[0].contains("Pretest2") && rows[0].ends_with('*'));
        assert!(rows[1].contains("Pretest1") && rows[1].ends_with('*'));
        assert!(rows[2].contains("Operational6") && !rows[2].ends_with('*'));
        assert!(table.ends_with("seed 7"));
    }

    #[test]
    fn test_table_headers_per_ordering() {
        let table = format_table("t1", 1, &[ordering(), ordering()]);
        assert!(table.contains("Ordering 1/2"));
        assert!(table.contains("Ordering 2/2"));
    }

    #[test]
    fn test_json_shape() {
        let json = format_json("t1", 42, &[ordering()]);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["testlet_id"], "t1");
        assert_eq!(value["seed"], 42);
        assert_eq!(value["orderings"][0][0]["position"], 1);
        assert_eq!(value["orderings"][0][0]["item_id"], "Pretest2");
        assert_eq!(value["orderings"][0][2]["item_type"], "operational");
    }
}
