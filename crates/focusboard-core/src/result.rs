use crate::error::FocusError;

pub type FocusResult<T> = Result<T, FocusError>;
