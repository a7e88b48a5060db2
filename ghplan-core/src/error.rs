//! Error types for the ghplan pipeline.

use thiserror::Error;

/// Errors that can occur while turning text into a contribution plan.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Font not found or unreadable: {0}")]
    FontNotFound(String),

    #[error("Text needs {columns} week columns but the target year's grid only has {max}")]
    TextTooLong { columns: u32, max: u32 },

    #[error("Rasterized text contains no visible pixels")]
    EmptyRaster,

    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ghplan operations.
pub type PlanResult<T> = Result<T, PlanError>;
