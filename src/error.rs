use crate::input::InputError;
use crate::lists::ListError;
use crate::patterns::PatternError;
use crate::report::ReportError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    List(#[from] ListError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("usage: {0}")]
    Usage(String),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage(_) | AppError::Pattern(_) => 2,
            AppError::Input(InputError::InvalidInput(_)) => 2,
            AppError::List(ListError::InvalidInput(_)) => 2,
            _ => 1,
        }
    }
}
