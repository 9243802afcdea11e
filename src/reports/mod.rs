use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use std::path::Path;

use prosegate::scorer::ScoreDetails;
use prosegate::PgResult;

/// One row of the history report / CSV export.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRow {
    pub file: String,
    pub commit: String,
    pub date: String,
    pub score: f64,
}

pub fn print_breakdown(label: &str, details: &ScoreDetails) {
    println!("\n📊 Readability breakdown: {}", label);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Raw"),
        Cell::new("Normalized"),
        Cell::new("Weighted").fg(Color::Cyan),
    ]);
    for metric in &details.metrics {
        table.add_row(vec![
            Cell::new(metric.name),
            Cell::new(format!("{:.2}", metric.raw)),
            Cell::new(format!("{:.4}", metric.normalized)),
            Cell::new(format!("{:.4}", metric.weighted)),
        ]);
    }
    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", table);
    println!(
        "Composite Score: {:.2}  ({} words, {} sentences)",
        details.composite, details.stats.words, details.stats.sentences
    );
}

pub fn print_history(rows: &[ScoreRow]) {
    // Group by file, preserving first-seen order.
    let mut grouped: Vec<(&str, Vec<&ScoreRow>)> = Vec::new();
    for row in rows {
        match grouped.iter_mut().find(|(file, _)| *file == row.file) {
            Some((_, entries)) => entries.push(row),
            None => grouped.push((row.file.as_str(), vec![row])),
        }
    }

    for (file, entries) in grouped {
        println!("\n📜 Readability history: {}", file);

        let mut table = Table::new();
        table
            .load_preset(ASCII_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.add_row(vec![
            Cell::new("Commit").add_attribute(Attribute::Bold),
            Cell::new("Date"),
            Cell::new("Score").fg(Color::Cyan),
        ]);
        for entry in entries {
            let short = if entry.commit.len() > 12 {
                &entry.commit[..12]
            } else {
                &entry.commit
            };
            table.add_row(vec![
                Cell::new(short),
                Cell::new(&entry.date),
                Cell::new(format!("{:.2}", entry.score)).set_alignment(CellAlignment::Right),
            ]);
        }
        println!("{}", table);
    }
}

pub fn write_csv(path: &Path, rows: &[ScoreRow]) -> PgResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
