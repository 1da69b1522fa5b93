//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::io::OutputFormat;

#[derive(Parser)]
#[command(
    name = "introscore",
    about = "Score spoken self-introduction transcripts against a fixed rubric",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a transcript and print the per-dimension breakdown
    Score {
        /// Transcript text; omitted, the transcript is read from --file or stdin
        text: Option<String>,

        /// Read the transcript from a file
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Treat the input as a JSON request body: {"text": ..., "wpm": ...}
        #[arg(long)]
        json: bool,

        /// Speaking pace in words per minute (default 120)
        #[arg(long)]
        wpm: Option<f64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = FormatArg::Terminal)]
        format: FormatArg,

        /// Write the report to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Path to a TOML scoring configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Base URL of a LanguageTool-compatible grammar service
        #[arg(long, env = "INTROSCORE_LANGUAGE_TOOL_URL")]
        language_tool_url: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Terminal,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Terminal => OutputFormat::Terminal,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn score_args_parse() {
        let cli = Cli::parse_from([
            "introscore",
            "score",
            "hello everyone",
            "--wpm",
            "125",
            "--format",
            "json",
        ]);
        let Commands::Score {
            text, wpm, format, ..
        } = cli.command;
        assert_eq!(text.as_deref(), Some("hello everyone"));
        assert_eq!(wpm, Some(125.0));
        assert_eq!(format, FormatArg::Json);
    }

    #[test]
    fn verbosity_flag_counts_occurrences() {
        let cli = Cli::parse_from(["introscore", "score", "hi"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["introscore", "score", "hi", "-v"]);
        assert_eq!(cli.verbose, 1);

        let cli = Cli::parse_from(["introscore", "score", "hi", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
