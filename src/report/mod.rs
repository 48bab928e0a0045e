pub mod json;
pub mod md;

use crate::error::CrsError;
use crate::types::report::ScoreReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, CrsError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CrsError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
