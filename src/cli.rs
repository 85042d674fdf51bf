//! Command-line interface definitions.
//!
//! Defines the CLI arguments using clap.

use clap::Parser;
use std::path::PathBuf;

/// Processes MarkDown files for publication
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Base documentation directory.
    #[arg(value_name = "PATH", value_parser = parse_base_dir)]
    pub base_dir: PathBuf,

    /// TOML file replacing the built-in title, permalink, nav order and section tables
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,
}

/// Accept only paths to existing directories.
pub fn parse_base_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err("expected path to a directory".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn test_parse_base_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("index.md");
        std::fs::write(&file, "").unwrap();

        assert_eq!(
            parse_base_dir(dir.path().to_str().unwrap()).unwrap(),
            dir.path()
        );
        assert!(parse_base_dir(file.to_str().unwrap()).is_err());
        assert!(parse_base_dir(dir.path().join("missing").to_str().unwrap()).is_err());
    }

    #[test]
    fn test_cli_args() {
        let dir = tempdir().unwrap();
        let base = dir.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["docmatter", base]).unwrap();
        assert_eq!(cli.base_dir, dir.path());
        assert_eq!(cli.config, None);

        let cli = Cli::try_parse_from(["docmatter", "-C", "publish.toml", base]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("publish.toml")));
    }

    #[test]
    fn test_cli_rejects_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("index.md");
        std::fs::write(&file, "").unwrap();

        let err = Cli::try_parse_from(["docmatter", file.to_str().unwrap()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }
}
