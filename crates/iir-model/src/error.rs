use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown filter criterion: {name} (expected one of: {expected})")]
    UnknownCriterion { name: String, expected: String },
    #[error("unknown column: {name}")]
    UnknownColumn { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
