use crate::io::output::{AssessmentReport, Explanation, OutputWriter};
use crate::io::writers::format_metric_value;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_reports(&mut self, reports: &[AssessmentReport]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Health Risk Assessment")?;
        writeln!(self.writer)?;

        for (index, report) in reports.iter().enumerate() {
            if reports.len() > 1 {
                if index > 0 {
                    writeln!(self.writer, "---")?;
                    writeln!(self.writer)?;
                }
                writeln!(self.writer, "## Assessment {} of {}", index + 1, reports.len())?;
                writeln!(self.writer)?;
            }
            self.write_report(report)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        self.write_summary(report)?;
        self.write_breakdown(report)?;
        self.write_recommendations(report)?;
        if let Some(explanation) = &report.explanation {
            self.write_explanation(explanation)?;
        }
        self.write_disclaimer(report)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let result = &report.result;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "### Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Risk Score | {} / 100 |", result.score)?;
        writeln!(self.writer, "| Category | {} |", result.category.label())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", result.category.description())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "### Risk Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Area | Risk |")?;
        writeln!(self.writer, "|------|------|")?;
        for (label, value) in report.result.breakdown.entries() {
            writeln!(self.writer, "| {label} | {value}% |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "### Preventive Recommendations")?;
        writeln!(self.writer)?;
        for (index, recommendation) in report.result.recommendations.iter().enumerate() {
            writeln!(self.writer, "{}. {}", index + 1, recommendation)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_explanation(&mut self, explanation: &Explanation) -> anyhow::Result<()> {
        writeln!(self.writer, "### Factor Contributions")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Factor | Value | Points |")?;
        writeln!(self.writer, "|--------|-------|--------|")?;
        for factor in &explanation.factors {
            writeln!(
                self.writer,
                "| {} | {} | {}/{} |",
                factor.metric.label(),
                format_metric_value(factor.metric, factor.value),
                factor.score,
                factor.max_score
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "Raw total: {} points", explanation.raw_total)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_disclaimer(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "> **Important Disclaimer:** {}", report.disclaimer)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
