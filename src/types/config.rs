use crate::error::CrsError;
use crate::projection::{ProjectionWindow, DEFAULT_HORIZON_YEARS, DEFAULT_WINDOW_DAYS};
use serde::Deserialize;

pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const MAX_HORIZON_YEARS: u32 = 50;
pub const MAX_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrsConfig {
    pub projection: Option<ProjectionConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionConfig {
    pub horizon_years: Option<u32>,
    pub window_days: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl CrsConfig {
    pub fn projection_window(&self) -> ProjectionWindow {
        match &self.projection {
            Some(projection) => ProjectionWindow {
                horizon_years: projection.horizon_years.unwrap_or(DEFAULT_HORIZON_YEARS),
                window_days: projection.window_days.unwrap_or(DEFAULT_WINDOW_DAYS),
            },
            None => ProjectionWindow::default(),
        }
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), CrsError> {
        Self::validate_window(self.projection_window())?;
        if self.log_level().trim().is_empty() {
            return Err(CrsError::ConfigParse(
                "logging.level cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_window(window: ProjectionWindow) -> Result<(), CrsError> {
        if !(1..=MAX_HORIZON_YEARS).contains(&window.horizon_years) {
            return Err(CrsError::ConfigParse(format!(
                "projection.horizon_years must be between 1 and {MAX_HORIZON_YEARS} (found {})",
                window.horizon_years
            )));
        }
        if window.window_days > MAX_WINDOW_DAYS {
            return Err(CrsError::ConfigParse(format!(
                "projection.window_days must be at most {MAX_WINDOW_DAYS} (found {})",
                window.window_days
            )));
        }
        Ok(())
    }
}
