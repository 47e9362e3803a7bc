// src/report.rs

use arrow::util::pretty::pretty_format_batches;

use crate::load::LoadRun;

/// Rows shown by `peek`.
pub const PEEK_ROWS: usize = 5;

/// Column the shape field starts at in the summary listing.
const KEY_WIDTH: usize = 35;

/// One `ERROR reading <filename>: <error>` line per failure, in load order.
pub fn failure_lines(run: &LoadRun) -> Vec<String> {
    run.failures()
        .iter()
        .map(|f| format!("ERROR reading {}: {:#}", f.filename, f.error))
        .collect()
}

pub fn print_failures(run: &LoadRun) {
    for line in failure_lines(run) {
        println!("{}", line);
    }
}

/// The count line, then one shape line per loaded table in load order.
pub fn summary_lines(run: &LoadRun) -> Vec<String> {
    let mut lines = Vec::with_capacity(run.len() + 1);
    lines.push(format!("Loaded {}/{} tables.", run.len(), run.total()));
    for (key, table) in run.iter() {
        let (rows, cols) = table.shape();
        lines.push(format!(
            "{:<width$}  shape=({}, {})",
            key,
            rows,
            cols,
            width = KEY_WIDTH
        ));
    }
    lines
}

pub fn summarize(run: &LoadRun) {
    let mut lines = summary_lines(run).into_iter();
    if let Some(count) = lines.next() {
        println!("\n{}\n", count);
    }
    for line in lines {
        println!("{}", line);
    }
}

/// Render the first rows of `key` as an ASCII table, or a not-loaded notice
/// when the key is absent from the run.
pub fn render_peek(run: &LoadRun, key: &str) -> String {
    let mut out = format!("=== Peek: {} ===\n", key);
    match run.get(key) {
        Some(table) => match pretty_format_batches(&[table.head(PEEK_ROWS)]) {
            Ok(rendered) => out.push_str(&rendered.to_string()),
            Err(e) => out.push_str(&format!("failed to render table: {}", e)),
        },
        None => out.push_str("Table not loaded."),
    }
    out
}

pub fn peek(run: &LoadRun, key: &str) {
    println!("\n{}", render_peek(run, key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::load_all;
    use crate::registry::TableRegistry;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn two_entry_run() -> Result<(tempfile::TempDir, LoadRun)> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.csv"), "x,y\n1,2\n3,4\n")?;
        let registry = TableRegistry::new([("a", "a.csv"), ("b", "missing.csv")]);
        let run = load_all(dir.path(), &registry);
        Ok((dir, run))
    }

    #[test]
    fn failure_lines_name_the_filename() -> Result<()> {
        let (_dir, run) = two_entry_run()?;
        let lines = failure_lines(&run);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ERROR reading missing.csv: "));
        Ok(())
    }

    #[test]
    fn summary_counts_and_pads_keys() -> Result<()> {
        let (_dir, run) = two_entry_run()?;
        let lines = summary_lines(&run);
        assert_eq!(lines[0], "Loaded 1/2 tables.");
        assert_eq!(lines[1], format!("{:<35}  shape=(2, 2)", "a"));
        Ok(())
    }

    #[test]
    fn peek_shows_at_most_five_rows() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("long.csv"),
            "x\n10\n11\n12\n13\n14\n15\n16\n",
        )?;
        let registry = TableRegistry::new([("long", "long.csv")]);
        let run = load_all(dir.path(), &registry);

        let rendered = render_peek(&run, "long");
        assert!(rendered.starts_with("=== Peek: long ==="));
        assert!(rendered.contains("14"));
        assert!(!rendered.contains("15"));
        assert!(!rendered.contains("16"));
        Ok(())
    }

    #[test]
    fn peek_of_unloaded_key_prints_notice() -> Result<()> {
        let (_dir, run) = two_entry_run()?;
        let rendered = render_peek(&run, "b");
        assert_eq!(rendered, "=== Peek: b ===\nTable not loaded.");
        Ok(())
    }
}
