use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn index_out_of_domain(index: usize, len: usize) -> Error {
        Error(ErrorKind::IndexOutOfDomain { index, len }.into())
    }

    pub fn unordered_index(index: usize, min: usize) -> Error {
        Error(ErrorKind::UnorderedIndex { index, min }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("sparse index {index} is outside of the dense domain 0..{len}")]
    IndexOutOfDomain { index: usize, len: usize },

    #[error("sparse index {index} breaks strict ordering (expected at least {min})")]
    UnorderedIndex { index: usize, min: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
