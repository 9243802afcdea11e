//! Git collaborator: staged files, per-file commit history, and blob
//! content at a commit. The scoring core never touches git; everything
//! here hands plain strings to it.

use std::path::Path;

use chrono::{TimeZone, Utc};
use git2::{Delta, DiffOptions, Repository, Sort};
use tracing::{debug, warn};

use crate::error::{PgResult, ProseGateError};

/// One historical version of a document.
#[derive(Debug, Clone)]
pub struct CommitDoc {
    /// Full commit hash.
    pub commit: String,
    /// Commit timestamp, RFC 3339.
    pub date: String,
    pub content: String,
}

pub struct GitLog {
    repo: Repository,
}

impl GitLog {
    /// Open the repository containing `path` (or any subdirectory).
    pub fn discover(path: &Path) -> PgResult<Self> {
        let repo = Repository::discover(path)?;
        debug!("opened git repository at {:?}", repo.path());
        Ok(Self { repo })
    }

    pub fn workdir(&self) -> PgResult<&Path> {
        self.repo.workdir().ok_or_else(|| {
            ProseGateError::Config("repository has no working directory (bare repo?)".to_string())
        })
    }

    /// Paths staged as added, copied, or modified, filtered by extension.
    pub fn staged_files(&self, extension: &str) -> PgResult<Vec<String>> {
        // An unborn branch has no HEAD tree; everything staged is new.
        let head_tree = match self.repo.head() {
            Ok(head) => Some(head.peel_to_tree()?),
            Err(_) => None,
        };
        let index = self.repo.index()?;
        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)?;

        let suffix = format!(".{}", extension);
        let mut files = Vec::new();
        for delta in diff.deltas() {
            if !matches!(
                delta.status(),
                Delta::Added | Delta::Copied | Delta::Modified
            ) {
                continue;
            }
            if let Some(path) = delta.new_file().path().and_then(Path::to_str) {
                if path.ends_with(&suffix) {
                    files.push(path.to_string());
                }
            }
        }
        files.sort();
        Ok(files)
    }

    /// Every tracked path with the given extension.
    pub fn tracked_files(&self, extension: &str) -> PgResult<Vec<String>> {
        let index = self.repo.index()?;
        let suffix = format!(".{}", extension);
        let mut files: Vec<String> = index
            .iter()
            .filter_map(|entry| String::from_utf8(entry.path).ok())
            .filter(|path| path.ends_with(&suffix))
            .collect();
        files.sort();
        Ok(files)
    }

    /// Document content at every commit that touched `file_path`,
    /// newest first.
    pub fn file_history(&self, file_path: &str) -> PgResult<Vec<CommitDoc>> {
        if self.repo.head().is_err() {
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;

        let mut docs = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            let tree = commit.tree()?;
            let parent_tree = commit.parent(0).ok().map(|p| p.tree()).transpose()?;

            let mut opts = DiffOptions::new();
            opts.pathspec(file_path);
            let diff =
                self.repo
                    .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;
            if diff.deltas().len() == 0 {
                continue;
            }

            let Some(content) = self.blob_content(&tree, file_path) else {
                continue;
            };
            docs.push(CommitDoc {
                commit: oid.to_string(),
                date: commit_date(&commit),
                content,
            });
        }
        Ok(docs)
    }

    fn blob_content(&self, tree: &git2::Tree, file_path: &str) -> Option<String> {
        let entry = tree.get_path(Path::new(file_path)).ok()?;
        let object = entry.to_object(&self.repo).ok()?;
        let blob = object.as_blob()?;
        match std::str::from_utf8(blob.content()) {
            Ok(text) => Some(text.to_string()),
            Err(_) => {
                warn!("skipping non-utf8 blob for {}", file_path);
                None
            }
        }
    }
}

fn commit_date(commit: &git2::Commit) -> String {
    match Utc.timestamp_opt(commit.time().seconds(), 0).single() {
        Some(datetime) => datetime.to_rfc3339(),
        None => String::new(),
    }
}
