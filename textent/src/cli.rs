// textent/src/cli.rs
//! Command-line argument surface.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored one-line report
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "textent", author, version, about)]
pub struct Cli {
    /// File to analyze; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Core keywords, comma separated; auto-extracted when omitted
    #[arg(long, short = 'k', value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Document title, used for topic-relevance scoring
    #[arg(long, short = 't', default_value = "")]
    pub title: String,

    /// Heading levels present in the document (1-6), comma separated
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(1..=6))]
    pub heading_levels: Vec<u8>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress internal logging
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels_parse_and_range() {
        let cli = Cli::try_parse_from(["textent", "--heading-levels", "1,2,3"]).unwrap();
        assert_eq!(cli.heading_levels, vec![1, 2, 3]);

        assert!(Cli::try_parse_from(["textent", "--heading-levels", "7"]).is_err());
        assert!(Cli::try_parse_from(["textent", "--heading-levels", "0"]).is_err());
    }

    #[test]
    fn test_keywords_split_on_commas() {
        let cli = Cli::try_parse_from(["textent", "-k", "苹果,香蕉"]).unwrap();
        assert_eq!(cli.keywords, vec!["苹果".to_string(), "香蕉".to_string()]);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["textent"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.keywords.is_empty());
        assert_eq!(cli.title, "");
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.quiet);
    }
}
