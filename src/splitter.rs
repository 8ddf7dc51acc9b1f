// Seed splitter: breaks one large multi-row INSERT into batched statements.
// Parsing stays deliberately simple (fixed row separator, no SQL grammar);
// the seed file's layout is known and rows pass through verbatim.

use crate::logger;
use crate::progress::ProgressManager;
use regex::Regex;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

// Table the seed INSERT targets unless overridden.
pub const DEFAULT_TABLE: &str = "recipes";

// Rows in the seed file are separated by a closing paren, comma, newline.
// A row containing this sequence inside a string literal would be split
// incorrectly; the seed data is known not to.
const ROW_SEPARATOR: &str = "),\n";

#[derive(Debug, Clone, serde::Serialize)]
pub struct SplitSummary {
    pub rows: usize,
    pub batches: usize,
    pub batch_size: usize,
}

// Result of the pure split: complete statements ready to be written.
#[derive(Debug)]
pub struct SplitOutput {
    pub statements: Vec<String>,
    pub rows: usize,
}

pub struct SeedSplitter {
    insert_re: Regex,
    batch_size: usize,
}

impl SeedSplitter {
    // Build the header regex once. Case-sensitive keywords, non-greedy
    // column list, `.` matching newlines.
    pub fn new(table: &str, batch_size: usize) -> Self {
        let insert_re = Regex::new(&format!(
            r"(?s)INSERT INTO {} .*? VALUES\s*",
            regex::escape(table)
        ))
        .expect("valid insert header regex");
        Self {
            insert_re,
            batch_size,
        }
    }

    // Split the input file into batched statements and write them to output.
    // Ok(None) means no INSERT header was found and nothing was written.
    // I/O errors propagate to the caller.
    pub fn split_file(
        &self,
        input: &Path,
        output: &Path,
        progress: &ProgressManager,
    ) -> crate::Result<Option<SplitSummary>> {
        logger::debug(&format!("SplitFile: reading {}", input.display()));
        let content = fs::read_to_string(input)?;

        let split = match self.split_content(&content) {
            Some(split) => split,
            None => {
                println!("Could not find INSERT statement");
                return Ok(None);
            }
        };

        let bar = progress.new_batch_bar(split.statements.len() as u64);
        let mut writer = BufWriter::new(File::create(output)?);
        for statement in &split.statements {
            writer.write_all(statement.as_bytes())?;
            if let Some(b) = &bar {
                b.inc(1);
            }
        }
        writer.flush()?;
        if let Some(b) = &bar {
            b.finish();
        }

        logger::debug(&format!(
            "SplitFile: wrote {} statements to {}",
            split.statements.len(),
            output.display()
        ));
        Ok(Some(SplitSummary {
            rows: split.rows,
            batches: split.statements.len(),
            batch_size: self.batch_size,
        }))
    }

    // Pure transform: locate the header, clean the rows, group them into
    // batches. None if the INSERT header is absent.
    pub fn split_content(&self, content: &str) -> Option<SplitOutput> {
        let m = self.insert_re.find(content)?;
        let header = m.as_str().trim();

        let mut values_block = content[m.end()..].trim();
        values_block = values_block.strip_suffix(';').unwrap_or(values_block);

        let rows = clean_rows(values_block);
        logger::debug(&format!("SplitContent: {} rows found", rows.len()));

        let statements = rows
            .chunks(self.batch_size)
            .map(|batch| format!("{}\n{};\n\n", header, batch.join(",\n")))
            .collect();

        Some(SplitOutput {
            statements,
            rows: rows.len(),
        })
    }
}

// Restore the parens the separator split consumed: every row but the last
// lost its closing paren; the leading paren check is defensive and does not
// trigger for well-formed input.
fn clean_rows(values_block: &str) -> Vec<String> {
    if values_block.trim().is_empty() {
        return Vec::new();
    }

    let parts: Vec<&str> = values_block.split(ROW_SEPARATOR).collect();
    let last = parts.len() - 1;

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let mut row = part.trim().to_string();
            if i < last {
                row.push(')');
            }
            if !row.starts_with('(') {
                row.insert(0, '(');
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter(batch_size: usize) -> SeedSplitter {
        SeedSplitter::new(DEFAULT_TABLE, batch_size)
    }

    fn seed_content(rows: &[&str]) -> String {
        format!(
            "INSERT INTO recipes (title, servings) VALUES\n{};\n",
            rows.join(",\n")
        )
    }

    // Pull the row tuples back out of an emitted statement.
    fn statement_rows(statement: &str) -> Vec<String> {
        let body = statement
            .strip_prefix("INSERT INTO recipes (title, servings) VALUES\n")
            .expect("statement starts with the header")
            .strip_suffix(";\n\n")
            .expect("statement ends with semicolon and blank line");
        body.split(",\n").map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_three_rows_into_two_batches() {
        let content = seed_content(&["('A',1)", "('B',2)", "('C',3)"]);
        let split = splitter(2).split_content(&content).expect("header found");

        assert_eq!(split.rows, 3);
        assert_eq!(split.statements.len(), 2);
        assert_eq!(
            split.statements[0],
            "INSERT INTO recipes (title, servings) VALUES\n('A',1),\n('B',2);\n\n"
        );
        assert_eq!(
            split.statements[1],
            "INSERT INTO recipes (title, servings) VALUES\n('C',3);\n\n"
        );
    }

    #[test]
    fn preserves_every_row_across_batches() {
        let rows: Vec<String> = (0..47).map(|i| format!("('recipe {}',{})", i, i)).collect();
        let refs: Vec<&str> = rows.iter().map(|s| s.as_str()).collect();
        let content = seed_content(&refs);

        let split = splitter(10).split_content(&content).expect("header found");
        assert_eq!(split.rows, 47);
        assert_eq!(split.statements.len(), 5);

        let emitted: Vec<String> = split
            .statements
            .iter()
            .flat_map(|s| statement_rows(s))
            .collect();
        assert_eq!(emitted, rows);
    }

    #[test]
    fn batch_bound_holds_and_last_batch_takes_the_remainder() {
        let rows: Vec<String> = (0..47).map(|i| format!("('r{}',{})", i, i)).collect();
        let refs: Vec<&str> = rows.iter().map(|s| s.as_str()).collect();
        let content = seed_content(&refs);

        let split = splitter(10).split_content(&content).expect("header found");
        let sizes: Vec<usize> = split
            .statements
            .iter()
            .map(|s| statement_rows(s).len())
            .collect();
        assert_eq!(sizes, vec![10, 10, 10, 10, 7]);
    }

    #[test]
    fn exact_multiple_fills_the_last_batch() {
        let rows: Vec<String> = (0..40).map(|i| format!("('r{}',{})", i, i)).collect();
        let refs: Vec<&str> = rows.iter().map(|s| s.as_str()).collect();
        let content = seed_content(&refs);

        let split = splitter(10).split_content(&content).expect("header found");
        assert_eq!(split.statements.len(), 4);
        assert_eq!(statement_rows(&split.statements[3]).len(), 10);
    }

    #[test]
    fn missing_insert_header_yields_none() {
        let content = "SELECT * FROM recipes;\n";
        assert!(splitter(10).split_content(content).is_none());
    }

    #[test]
    fn other_table_does_not_match_default_header() {
        let content = "INSERT INTO users (name) VALUES\n('A');\n";
        assert!(splitter(10).split_content(content).is_none());
        assert!(SeedSplitter::new("users", 10)
            .split_content(content)
            .is_some());
    }

    #[test]
    fn trailing_semicolon_is_optional() {
        let with = seed_content(&["('A',1)", "('B',2)"]);
        let without = with.trim_end().trim_end_matches(';').to_string();

        let a = splitter(10).split_content(&with).expect("header found");
        let b = splitter(10).split_content(&without).expect("header found");
        assert_eq!(a.statements, b.statements);
    }

    #[test]
    fn empty_values_block_yields_no_statements() {
        let content = "INSERT INTO recipes (title, servings) VALUES\n;\n";
        let split = splitter(10).split_content(content).expect("header found");
        assert_eq!(split.rows, 0);
        assert!(split.statements.is_empty());
    }

    #[test]
    fn rows_with_nested_parens_pass_through_verbatim() {
        // JSON-ish payloads with nested parens survive as long as the row
        // separator sequence never appears inside them.
        let content = seed_content(&[
            "('Stew','{\"steps\": [\"chop (fine)\", \"simmer\"]}')",
            "('Pie','crust (blind baked)')",
        ]);
        let split = splitter(1).split_content(&content).expect("header found");
        assert_eq!(split.rows, 2);
        assert!(split.statements[0].contains("chop (fine)"));
        assert!(split.statements[1].contains("crust (blind baked)"));
    }

    #[test]
    fn header_keeps_arbitrary_column_lists() {
        let content =
            "-- seed\nINSERT INTO recipes (a, b,\n  c) VALUES\n('x',1,2),\n('y',3,4);\n";
        let split = splitter(10).split_content(content).expect("header found");
        assert!(split.statements[0]
            .starts_with("INSERT INTO recipes (a, b,\n  c) VALUES\n('x',1,2)"));
        assert_eq!(split.rows, 2);
    }
}
