pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

use crate::core::MetricKind;

const BAR_WIDTH: usize = 20;

/// Fixed-width gauge for a percentage; values above 100 fill the bar.
pub(crate) fn percent_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Human-readable metric value with its unit.
pub(crate) fn format_metric_value(metric: MetricKind, value: f64) -> String {
    match metric {
        MetricKind::FamilyHistory => {
            if value == 1.0 {
                "yes".to_string()
            } else {
                "no".to_string()
            }
        }
        MetricKind::StressLevel => format!("{value}{}", metric.unit()),
        _ => format!("{value} {}", metric.unit()),
    }
}
