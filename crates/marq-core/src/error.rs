use thiserror::Error;

pub type MarqResult<T> = Result<T, MarqError>;

#[derive(Debug, Error)]
pub enum MarqError {
    #[error("config error: {0}")]
    Config(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("chain error: {0}")]
    Chain(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
