//! Report writers: JSON for machine consumers, colored text for terminals.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use colored::*;

use crate::report::ScoreReport;
use crate::scoring::breakdown::{
    MAX_FILLER, MAX_FLOW, MAX_GRAMMAR, MAX_KEYWORDS, MAX_PACE, MAX_SALUTATION, MAX_SENTIMENT,
    MAX_VOCABULARY,
};
use crate::scoring::ScoreBreakdown;

pub trait ReportWriter {
    fn write_report(&mut self, breakdown: &ScoreBreakdown) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, breakdown: &ScoreBreakdown) -> anyhow::Result<()> {
        let report = ScoreReport::from(breakdown);
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, breakdown: &ScoreBreakdown) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Self-Introduction Score".bold())?;
        writeln!(self.writer)?;

        let rows: [(&str, u32, u32); 8] = [
            ("Salutation", breakdown.salutation, MAX_SALUTATION),
            ("Keywords", breakdown.keywords, MAX_KEYWORDS),
            ("Flow", breakdown.flow, MAX_FLOW),
            ("Pace", breakdown.pace, MAX_PACE),
            ("Grammar", breakdown.grammar, MAX_GRAMMAR),
            ("Vocabulary", breakdown.vocabulary, MAX_VOCABULARY),
            ("Filler words", breakdown.filler, MAX_FILLER),
            ("Sentiment", breakdown.sentiment, MAX_SENTIMENT),
        ];
        for (label, value, max) in rows {
            writeln!(self.writer, "  {label:<14} {value:>3} / {max}")?;
        }

        if !breakdown.filler_findings.is_empty() {
            let found: Vec<String> = breakdown
                .filler_findings
                .iter()
                .map(|(word, count)| format!("{word} x{count}"))
                .collect();
            writeln!(self.writer, "  {:<14} {}", "Fillers heard", found.join(", "))?;
        }

        let total = format!("{}/100", breakdown.overall);
        let total = if breakdown.overall >= 80 {
            total.green()
        } else if breakdown.overall >= 50 {
            total.yellow()
        } else {
            total.red()
        };
        writeln!(self.writer)?;
        writeln!(self.writer, "  {:<14} {}", "Total".bold(), total)?;

        if !breakdown.degraded.is_empty() {
            writeln!(
                self.writer,
                "{}",
                "  note: some dimensions were scored from neutral defaults \
                 (collaborator unavailable)"
                    .dimmed()
            )?;
        }
        Ok(())
    }
}

/// Output formats supported by the report writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// Build a writer for the chosen format, targeting a file when `output` is
/// given and stdout otherwise.
pub fn create_writer(
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<Box<dyn ReportWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::KeywordDetail;

    fn sample_breakdown() -> ScoreBreakdown {
        ScoreBreakdown {
            salutation: 4,
            keywords: 8,
            keyword_detail: KeywordDetail::default(),
            flow: 5,
            pace: 10,
            grammar: 2,
            grammar_quality: 1.0,
            vocabulary: 10,
            vocabulary_ratio: 1.0,
            filler: 15,
            filler_rate: 0.0,
            filler_findings: Default::default(),
            sentiment: 3,
            sentiment_positivity: 0.0,
            overall: 57,
            degraded: vec![],
        }
    }

    #[test]
    fn json_writer_emits_valid_json() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_breakdown())
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["Total Score"], "57/100");
    }

    #[test]
    fn terminal_writer_lists_every_dimension() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&sample_breakdown())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        for label in [
            "Salutation",
            "Keywords",
            "Flow",
            "Pace",
            "Grammar",
            "Vocabulary",
            "Filler words",
            "Sentiment",
            "Total",
        ] {
            assert!(text.contains(label), "missing {label} in:\n{text}");
        }
    }
}
