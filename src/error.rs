use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A read or write signalled an explicit error. Not to be confused with a
    /// zero-byte read, which is end-of-resource and reported through
    /// [`crate::connection::ReadOutcome`].
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before the requested pattern was seen.
    #[error("pattern not found before end of stream")]
    PatternNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
