use thiserror::Error;

pub type FlowMapResult<T> = Result<T, FlowMapError>;

#[derive(Debug, Error)]
pub enum FlowMapError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to fetch `{location}`: {reason}")]
    Fetch { location: String, reason: String },

    #[error("failed to parse flow resource: {0}")]
    Parse(String),
}
