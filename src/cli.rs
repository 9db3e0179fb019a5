//! Command-line argument parsing for the editor

use clap::Parser;
use std::path::PathBuf;

/// A small modal line editor
#[derive(Parser, Debug)]
#[command(name = "linepad", version, about = "A small modal line editor")]
pub struct CliArgs {
    /// File to open (created on first save if it doesn't exist)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Go to line N after opening
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Log filter, overrides RUST_LOG (e.g. "debug", "linepad::update=trace")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupConfig {
    pub path: Option<PathBuf>,
    /// Initial cursor line, converted to 0-indexed
    pub initial_line: Option<usize>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> StartupConfig {
        StartupConfig {
            path: self.path,
            // 1-indexed from the user
            initial_line: self.line.map(|line| line.saturating_sub(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("linepad").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_args() {
        let config = parse(&[]).into_config();
        assert_eq!(config, StartupConfig::default());
    }

    #[test]
    fn test_path_and_line() {
        let config = parse(&["main.c", "--line", "10"]).into_config();
        assert_eq!(config.path, Some(PathBuf::from("main.c")));
        assert_eq!(config.initial_line, Some(9));
    }

    #[test]
    fn test_line_zero_clamps() {
        let config = parse(&["--line", "0"]).into_config();
        assert_eq!(config.initial_line, Some(0));
    }

    #[test]
    fn test_log_level() {
        let args = parse(&["--log-level", "debug"]);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_rejects_two_paths() {
        assert!(CliArgs::try_parse_from(["linepad", "a", "b"]).is_err());
    }
}
