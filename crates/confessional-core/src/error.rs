use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("duplicate catalog entry: {title}")]
    DuplicateEntry { title: String },

    #[error("unknown scoring policy: {0}")]
    UnknownPolicy(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
