use std::fmt;
use std::fs;

use anyhow::{Context, Result, anyhow};

use crate::config::Config;
use crate::processor::{self, FileOutcome, ProcessError, ProcessOptions};
use crate::walker;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub scanned: usize,
    pub updated: usize,
    pub would_update: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} html files scanned, {} updated, ",
            self.scanned, self.updated
        )?;
        if self.would_update > 0 {
            write!(f, "{} would update, ", self.would_update)?;
        }
        write!(f, "{} unchanged, {} failed", self.unchanged, self.failed)
    }
}

/// Walks `config.root_dir` once and rewrites every matching HTML file.
///
/// Read failures are always logged and skipped. Write and traversal failures
/// are skipped too unless `fail_fast` is set, in which case the first one
/// ends the run.
pub fn run(config: &Config) -> Result<RunSummary> {
    let root = config.root_dir.as_path();
    let metadata = fs::metadata(root)
        .with_context(|| format!("cannot access root directory {}", root.display()))?;
    if !metadata.is_dir() {
        return Err(anyhow!("root path {} is not a directory", root.display()));
    }

    let options = ProcessOptions {
        dry_run: config.dry_run,
    };
    let mut summary = RunSummary::default();

    for entry in walker::html_files(root) {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                summary.failed += 1;
                let location = err.path().unwrap_or(root).display().to_string();
                if config.fail_fast {
                    return Err(
                        anyhow::Error::new(err).context(format!("failed to walk {location}"))
                    );
                }
                eprintln!("Error walking {location}: {err}");
                continue;
            }
        };

        summary.scanned += 1;
        match processor::process_file(&path, options) {
            Ok(FileOutcome::Updated) => {
                println!("Updating {}", path.display());
                summary.updated += 1;
            }
            Ok(FileOutcome::WouldUpdate) => {
                println!("Would update {}", path.display());
                summary.would_update += 1;
            }
            Ok(FileOutcome::Unchanged) => summary.unchanged += 1,
            Err(err @ ProcessError::Read { .. }) => {
                eprintln!("{err}");
                summary.failed += 1;
            }
            Err(err @ ProcessError::Write { .. }) => {
                summary.failed += 1;
                if config.fail_fast {
                    return Err(err.into());
                }
                eprintln!("{err}");
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("index.html");
        fs::write(&file, "").unwrap();

        let err = run(&Config::new(&file)).unwrap_err();

        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn missing_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let err = run(&Config::new(dir.path().join("absent"))).unwrap_err();

        assert!(err.to_string().contains("cannot access root directory"));
    }

    #[test]
    fn summary_line_format() {
        let summary = RunSummary {
            scanned: 4,
            updated: 2,
            would_update: 0,
            unchanged: 1,
            failed: 1,
        };

        assert_eq!(
            summary.to_string(),
            "4 html files scanned, 2 updated, 1 unchanged, 1 failed"
        );
    }

    #[test]
    fn dry_run_summary_mentions_pending_writes() {
        let summary = RunSummary {
            scanned: 3,
            would_update: 2,
            unchanged: 1,
            ..RunSummary::default()
        };

        assert_eq!(
            summary.to_string(),
            "3 html files scanned, 0 updated, 2 would update, 1 unchanged, 0 failed"
        );
    }
}
