use crate::core::RiskCategory;
use crate::io::output::{AssessmentReport, Explanation, OutputWriter};
use crate::io::writers::{format_metric_value, percent_bar};
use colored::*;
use std::io::Write;

const RULE: &str = "───────────────────────────────────────────";
const BANNER: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn paint(text: &str, category: RiskCategory) -> ColoredString {
    match category {
        RiskCategory::Low => text.green(),
        RiskCategory::Medium => text.yellow(),
        RiskCategory::High => text.red(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_reports(&mut self, reports: &[AssessmentReport]) -> anyhow::Result<()> {
        for (index, report) in reports.iter().enumerate() {
            let title = if reports.len() > 1 {
                format!("HEALTH RISK ASSESSMENT {}/{}", index + 1, reports.len())
            } else {
                "HEALTH RISK ASSESSMENT".to_string()
            };
            self.write_header(&title)?;
            self.write_score(report)?;
            self.write_breakdown(report)?;
            self.write_recommendations(report)?;
            if let Some(explanation) = &report.explanation {
                self.write_explanation(explanation)?;
            }
            self.write_disclaimer(report)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", BANNER.cyan())?;
        writeln!(self.writer, "{}", format!("{title:^43}").bold().cyan())?;
        writeln!(self.writer, "{}", BANNER.cyan())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_score(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let result = &report.result;
        writeln!(
            self.writer,
            "Risk Score: {}  [{}]",
            paint(&format!("{}/100", result.score), result.category).bold(),
            paint(&percent_bar(result.score), result.category)
        )?;
        writeln!(
            self.writer,
            "Category:   {}",
            paint(result.category.label(), result.category).bold()
        )?;
        writeln!(self.writer, "            {}", result.category.description().dimmed())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Risk Breakdown".bold())?;
        writeln!(self.writer, "{RULE}")?;
        for (label, value) in report.result.breakdown.entries() {
            // Each area is shaded on the same scale as the overall score.
            let category = RiskCategory::from_score(value);
            writeln!(
                self.writer,
                "  {:<16}{:>5}  [{}]",
                label,
                format!("{value}%"),
                paint(&percent_bar(value), category)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Preventive Recommendations".bold())?;
        writeln!(self.writer, "{RULE}")?;
        for (index, recommendation) in report.result.recommendations.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", index + 1, recommendation)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_explanation(&mut self, explanation: &Explanation) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Factor Contributions".bold())?;
        writeln!(self.writer, "{RULE}")?;
        for factor in &explanation.factors {
            let points = format!("{}/{}", factor.score, factor.max_score);
            let points = if factor.score == 0 {
                points.green()
            } else if factor.score == factor.max_score {
                points.red()
            } else {
                points.yellow()
            };
            writeln!(
                self.writer,
                "  {:<16}{:>16}  {}",
                factor.metric.label(),
                format_metric_value(factor.metric, factor.value),
                points
            )?;
        }
        writeln!(self.writer, "  Raw total: {} points", explanation.raw_total)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_disclaimer(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Important Disclaimer".bold().yellow())?;
        writeln!(self.writer, "{}", report.disclaimer.dimmed())?;
        Ok(())
    }
}
