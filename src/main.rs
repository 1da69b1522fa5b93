use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use introscore::cli::{Cli, Commands, FormatArg};
use introscore::io::create_writer;
use introscore::report::{parse_request, ScoreRequest};
use introscore::ScoringConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Score {
            text,
            file,
            json,
            wpm,
            format,
            output,
            config,
            language_tool_url,
        } => handle_score(ScoreArgs {
            text,
            file,
            json,
            wpm,
            format,
            output,
            config,
            language_tool_url,
        }),
    }
}

/// `-v` raises logging to debug, `-vv` and beyond to trace. Without the
/// flag, `RUST_LOG` applies as usual.
fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

struct ScoreArgs {
    text: Option<String>,
    file: Option<PathBuf>,
    json: bool,
    wpm: Option<f64>,
    format: FormatArg,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    language_tool_url: Option<String>,
}

fn handle_score(args: ScoreArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ScoringConfig::from_file(path)?,
        None => ScoringConfig::default(),
    };
    if let Some(url) = args.language_tool_url {
        config.language_tool_url = Some(url);
    }

    let input = read_input(args.text, args.file)?;
    let mut request = if args.json {
        parse_request(&input)?
    } else {
        ScoreRequest {
            text: input,
            wpm: None,
        }
    };
    // Precedence: --wpm flag, then the request body, then the configured
    // default.
    if let Some(wpm) = args.wpm {
        request.wpm = Some(wpm);
    }
    if request.wpm.is_none() {
        request.wpm = Some(config.default_wpm);
    }

    let engine = config.build_engine();
    let breakdown = engine.evaluate_request(&request)?;

    let mut writer = create_writer(args.format.into(), args.output)?;
    writer.write_report(&breakdown)
}

/// Transcript resolution order: positional argument, then --file, then stdin.
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("failed to read transcript from {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read transcript from stdin")?;
    Ok(buffer)
}
