use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "cachebust",
    version,
    about = "Append a cache-busting query to header/footer partial fetches in HTML files."
)]
pub struct Cli {
    /// The directory tree to scan.
    #[arg(value_name = "ROOT_DIR", env = "CACHEBUST_ROOT_DIR")]
    pub root_dir: Option<PathBuf>,

    /// Same as ROOT_DIR; takes precedence when both are given.
    #[arg(long = "root-dir", value_name = "ROOT_DIR")]
    pub root_dir_flag: Option<PathBuf>,

    /// Report files that would change without writing them.
    #[arg(long, env = "CACHEBUST_DRY_RUN")]
    pub dry_run: bool,

    /// Abort on the first write or traversal error instead of skipping it.
    #[arg(long, env = "CACHEBUST_FAIL_FAST")]
    pub fail_fast: bool,

    /// Do not print the closing summary line.
    #[arg(long, short, env = "CACHEBUST_QUIET")]
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub root_dir: PathBuf,
    pub dry_run: bool,
    pub fail_fast: bool,
    pub quiet: bool,
}

impl Config {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            dry_run: false,
            fail_fast: false,
            quiet: false,
        }
    }

    pub fn from_cli() -> Result<Self> {
        Config::from_parts(Cli::parse())
    }

    fn from_parts(cli: Cli) -> Result<Self> {
        let root_dir = cli.root_dir_flag.or(cli.root_dir).ok_or_else(|| {
            anyhow!(
                "root directory is required (pass ROOT_DIR, --root-dir or set CACHEBUST_ROOT_DIR)"
            )
        })?;

        if root_dir.as_os_str().is_empty() {
            return Err(anyhow!("root directory must not be empty"));
        }

        Ok(Self {
            root_dir,
            dry_run: cli.dry_run,
            fail_fast: cli.fail_fast,
            quiet: cli.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config> {
        let cli = Cli::try_parse_from(std::iter::once("cachebust").chain(args.iter().copied()))?;
        Config::from_parts(cli)
    }

    #[test]
    fn positional_root_and_flags() {
        let config = parse(&["site", "--dry-run", "--fail-fast", "-q"]).unwrap();

        assert_eq!(config.root_dir, PathBuf::from("site"));
        assert!(config.dry_run);
        assert!(config.fail_fast);
        assert!(config.quiet);
    }

    #[test]
    fn root_dir_flag_is_accepted() {
        let config = parse(&["--root-dir", "site", "--dry-run"]).unwrap();

        assert_eq!(config.root_dir, PathBuf::from("site"));
        assert!(config.dry_run);
    }

    #[test]
    fn root_dir_flag_wins_over_positional() {
        let config = parse(&["--root-dir", "flagged", "positional"]).unwrap();

        assert_eq!(config.root_dir, PathBuf::from("flagged"));
    }

    #[test]
    fn flags_default_off() {
        let config = parse(&["site"]).unwrap();

        assert!(!config.dry_run);
        assert!(!config.fail_fast);
        assert!(!config.quiet);
    }

    #[test]
    fn empty_root_is_rejected() {
        let cli = Cli {
            root_dir: Some(PathBuf::new()),
            root_dir_flag: None,
            dry_run: false,
            fail_fast: false,
            quiet: false,
        };

        let err = Config::from_parts(cli).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn missing_root_is_rejected() {
        let cli = Cli {
            root_dir: None,
            root_dir_flag: None,
            dry_run: false,
            fail_fast: false,
            quiet: false,
        };

        let err = Config::from_parts(cli).unwrap_err();
        assert!(err.to_string().contains("root directory is required"));
    }
}
