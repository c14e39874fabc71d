use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermError {
    #[error("unknown command {0:?}, try `help`")]
    UnknownCommand(String),

    #[error("which row? give its number")]
    MissingRow,

    #[error("{0:?} is not a row number")]
    BadRow(String),

    #[error("there is no row {0}")]
    NoSuchRow(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
