pub mod output;
pub mod writers;

pub use output::{create_writer, AssessmentReport, Explanation, OutputFormat, OutputWriter};

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Destination for a report: the named file, or stdout.
pub fn open_destination(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = fs::File::create(path)?;
            Ok(Box::new(std::io::BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
