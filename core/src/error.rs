use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Rate '{name}' must be within [0, 1], got {value}")]
    InvalidRate { name: String, value: f64 },

    #[error("Quantity '{name}' must be a finite non-negative number, got {value}")]
    NegativeQuantity { name: String, value: f64 },

    #[error("Channel '{channel}' has zero concurrency; concurrency must be at least 1")]
    InvalidConcurrency { channel: String },

    #[error("Week window invalid: start week {start_week} (1-53), week count {num_weeks} (1-52)")]
    InvalidWeekWindow { start_week: u32, num_weeks: u32 },

    #[error("Unknown employment class '{id}'")]
    UnknownClass { id: String },

    #[error("Division undefined: {what}")]
    DivisionUndefined { what: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
