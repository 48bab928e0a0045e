use crate::projection::ProjectionPoint;
use crate::types::scoring::ScoreBreakdown;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub table_version: String,
    pub breakdown: ScoreBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<Vec<ProjectionPoint>>,
}
