//! CLI interface definitions for the `fsreport` application.
//!
//! ```bash
//! fsreport --path ~/projects --report inventory.xlsx --lang ru -v
//! ```

use crate::locale::Language;
use clap::Parser;
use std::path::PathBuf;

/// Generates a report of the files and folders under a directory.
///
/// The report format follows the extension of `--report`:
/// .csv, .json, .txt, .log, .docx, .xlsx, .pdf
#[derive(Parser, Debug)]
#[command(name = "fsreport", version, about)]
pub struct Args {
    /// Directory to analyze
    #[arg(long, value_name = "DIR")]
    pub path: PathBuf,

    /// Report file to write; its extension selects the format
    #[arg(long, value_name = "FILE")]
    pub report: PathBuf,

    /// Language of the report labels
    #[arg(long, value_enum, default_value_t = Language::English)]
    pub lang: Language,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Maps the `-v` count to a log filter: warnings by default, `-v` for info,
    /// `-vv` and above for debug.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_flags() {
        let args = Args::try_parse_from(["fsreport", "--path", "/tmp", "--report", "r.csv"]).unwrap();
        assert_eq!(args.path, PathBuf::from("/tmp"));
        assert_eq!(args.report, PathBuf::from("r.csv"));
        assert_eq!(args.lang, Language::English);
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_missing_report_is_rejected() {
        assert!(Args::try_parse_from(["fsreport", "--path", "/tmp"]).is_err());
    }

    #[test]
    fn test_lang_and_verbosity() {
        let args = Args::try_parse_from([
            "fsreport", "--path", ".", "--report", "r.txt", "--lang", "ru", "-vv",
        ])
        .unwrap();
        assert_eq!(args.lang, Language::Russian);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }
}
