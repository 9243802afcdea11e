use clap::Args;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use prosegate::config::GateConfig;
use prosegate::{score_document_debug, PgResult};

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: GateConfig,

    /// File to score; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Emit the per-metric breakdown as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs) -> PgResult<i32> {
    let (label, content) = match &args.file {
        Some(path) => (path.display().to_string(), fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            ("<stdin>".to_string(), buffer)
        }
    };

    let details = score_document_debug(&content);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        reports::print_breakdown(&label, &details);
    }

    Ok(if details.composite < args.config.threshold {
        1
    } else {
        0
    })
}
