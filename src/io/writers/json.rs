use crate::io::output::{AssessmentReport, OutputWriter};
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    /// A single report is written as an object, a batch as an array.
    fn write_reports(&mut self, reports: &[AssessmentReport]) -> anyhow::Result<()> {
        let json = match reports {
            [single] => serde_json::to_string_pretty(single)?,
            batch => serde_json::to_string_pretty(batch)?,
        };
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HealthMetrics;
    use crate::risk::RiskScorer;

    fn render(reports: &[AssessmentReport]) -> serde_json::Value {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_reports(reports).unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn single_report_is_an_object() {
        let report = AssessmentReport::assess(&RiskScorer::new(), HealthMetrics::default(), false);
        let value = render(&[report]);
        assert!(value.is_object());
        assert_eq!(value["result"]["category"], "low");
        assert_eq!(value["metrics"]["bloodPressure"], 120.0);
    }

    #[test]
    fn batch_is_an_array() {
        let scorer = RiskScorer::new();
        let reports = vec![
            AssessmentReport::assess(&scorer, HealthMetrics::default(), false),
            AssessmentReport::assess(&scorer, HealthMetrics::default(), true),
        ];
        let value = render(&reports);
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert!(value[1]["explanation"]["factors"].is_array());
    }
}
