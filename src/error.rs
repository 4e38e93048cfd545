use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvolutionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Evaluation error: {0}")]
    Evaluation(String),

    #[error("Parameter error: {0}")]
    Parameters(#[from] serde_yml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EvolutionError>;
