use inquire::InquireError;
use std::io::Error as IOError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Path(#[from] ErrPath),
    #[error(transparent)]
    Input(#[from] ErrInput),
    #[error(transparent)]
    Declined(#[from] Declined),
    #[error(transparent)]
    IO(#[from] ErrIO),
    #[error(transparent)]
    Inquire(#[from] ErrInquire),
}

#[derive(Debug, Error)]
pub enum ErrPath {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Not a regular file: {0}")]
    NotAFile(String),
    #[error("Empty path")]
    EmptyPath,
}

#[derive(Debug, Error)]
pub enum ErrInput {
    #[error("Invalid choice: {0:?}")]
    InvalidChoice(String),
    #[error("Not a number: {0:?}")]
    NotANumber(String),
    #[error("Invalid line number {line} (expected 1 to {max})")]
    LineOutOfRange { line: usize, max: usize },
    #[error("Input closed")]
    Closed,
    #[error("Operation cancelled")]
    Cancelled,
}

#[derive(Debug, Error)]
pub enum Declined {
    #[error("Overwrite declined")]
    Overwrite,
    #[error("Deletion declined")]
    Delete,
}

#[derive(Debug, Error)]
pub enum ErrIO {
    #[error("I/O error: {0}")]
    IoError(#[from] IOError),
}

#[derive(Debug, Error)]
pub enum ErrInquire {
    #[error("Inquire error: {0}")]
    InquireError(#[from] InquireError),
}

impl AppError {
    /// The input source is gone: the dispatcher must stop.
    pub fn is_exit(&self) -> bool {
        matches!(self, AppError::Input(ErrInput::Closed))
    }

    /// User backed out of the operation, nothing was touched.
    pub fn is_declined(&self) -> bool {
        matches!(
            self,
            AppError::Declined(_) | AppError::Input(ErrInput::Cancelled)
        )
    }
}

impl From<IOError> for AppError {
    fn from(value: IOError) -> Self {
        AppError::IO(ErrIO::IoError(value))
    }
}

impl From<InquireError> for AppError {
    fn from(value: InquireError) -> Self {
        match value {
            InquireError::OperationInterrupted => AppError::Input(ErrInput::Closed),
            InquireError::OperationCanceled => AppError::Input(ErrInput::Cancelled),
            e => AppError::Inquire(ErrInquire::InquireError(e)),
        }
    }
}
