use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use prosegate::config::GateConfig;
use prosegate::gitlog::GitLog;
use prosegate::{score_document, PgResult};

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: GateConfig,

    /// Repository to check (any path inside it)
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,
}

/// Pre-commit gate: score every staged Markdown file, fail if any score
/// falls below the threshold. Returns the process exit code.
pub fn run(args: CheckArgs) -> PgResult<i32> {
    let git = GitLog::discover(&args.repo)?;
    let staged = git.staged_files(&args.config.extension)?;

    if staged.is_empty() {
        println!("No staged Markdown files to check.");
        return Ok(0);
    }

    let root = git.workdir()?.to_path_buf();

    if gate_files(&staged, &root, args.config.threshold) {
        println!("\nPre-commit check failed. Fix the issues and try again.");
        Ok(1)
    } else {
        println!("\n✅ Readability check passed!");
        Ok(0)
    }
}

/// Score each staged file against the threshold. A file that cannot be
/// read (deleted after staging, permissions) counts as a gate failure
/// rather than aborting the whole check.
fn gate_files(staged: &[String], root: &Path, threshold: f64) -> bool {
    let mut failed = false;

    for file in staged {
        println!("🔎 Checking readability: {}", file);
        let content = match fs::read_to_string(root.join(file)) {
            Ok(content) => content,
            Err(e) => {
                println!("   ❌ Unable to read {}: {}", file, e);
                failed = true;
                continue;
            }
        };
        let score = score_document(&content);
        println!("   Score: {:.2}", score);

        if score < threshold {
            println!(
                "   ❌ Readability score below threshold ({:.2} < {:.2})",
                score, threshold
            );
            failed = true;
        }
    }

    failed
}
