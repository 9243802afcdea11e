use clap::Args;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use prosegate::config::GateConfig;
use prosegate::gitlog::{CommitDoc, GitLog};
use prosegate::{score_document, PgResult};

use crate::reports::{self, ScoreRow};

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub config: GateConfig,

    /// Analyze a single file instead of every tracked document
    #[arg(short, long)]
    pub file: Option<String>,

    /// Write results to a CSV file instead of the terminal
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Repository to analyze (any path inside it)
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,
}

/// Score every commit that touched each document, plus the current
/// working-tree content as a pseudo-commit.
pub fn run(args: HistoryArgs) -> PgResult<i32> {
    let git = GitLog::discover(&args.repo)?;
    let files = match &args.file {
        Some(file) => vec![file.clone()],
        None => git.tracked_files(&args.config.extension)?,
    };

    if files.is_empty() {
        println!("No Markdown files found in the repository.");
        return Ok(0);
    }

    let root = git.workdir()?.to_path_buf();
    let rows = collect_rows(&files, &root, |file| git.file_history(file));

    match &args.output {
        Some(path) => {
            reports::write_csv(path, &rows)?;
            println!("Results written to {}", path.display());
        }
        None => reports::print_history(&rows),
    }
    Ok(0)
}

/// Walk each file's commit history and score every revision. A file
/// whose history cannot be read is reported and skipped so one bad
/// path never sinks the rest of the run.
fn collect_rows<F>(files: &[String], root: &Path, history_for: F) -> Vec<ScoreRow>
where
    F: Fn(&str) -> PgResult<Vec<CommitDoc>>,
{
    let mut rows = Vec::new();

    for file in files {
        println!("Analyzing {} across commits...", file);
        let docs = match history_for(file) {
            Ok(docs) => docs,
            Err(e) => {
                tracing::warn!(file, error = %e, "skipping file history");
                eprintln!("⚠️  Skipping {}: {}", file, e);
                continue;
            }
        };

        // The git walk stays sequential; scoring dominates and is pure,
        // so commits fan out across the thread pool.
        let scored: Vec<ScoreRow> = docs
            .par_iter()
            .filter(|doc| !doc.content.trim().is_empty())
            .map(|doc| ScoreRow {
                file: file.clone(),
                commit: doc.commit.clone(),
                date: doc.date.clone(),
                score: score_document(&doc.content),
            })
            .collect();
        rows.extend(scored);

        // Current working-tree content rides along, matching history
        // reports against what is about to be committed.
        if let Ok(content) = fs::read_to_string(root.join(file)) {
            rows.push(ScoreRow {
                file: file.clone(),
                commit: "STAGED".to_string(),
                date: Utc::now().to_rfc3339(),
                score: score_document(&content),
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosegate::ProseGateError;

    #[test]
    fn bad_file_history_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.md"), "Plain prose lives here.").unwrap();

        let files = vec!["good.md".to_string(), "bad.md".to_string()];
        let rows = collect_rows(&files, dir.path(), |file| {
            if file == "bad.md" {
                Err(ProseGateError::Validation("corrupt object".into()))
            } else {
                Ok(vec![CommitDoc {
                    commit: "abc123".to_string(),
                    date: "2024-01-01T00:00:00+00:00".to_string(),
                    content: "Plain prose lives here.".to_string(),
                }])
            }
        });

        assert!(rows.iter().all(|row| row.file == "good.md"));
        assert_eq!(rows.len(), 2); // one commit plus the STAGED row
    }
}
