use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Validation,
    Parse,
    NotFound { id: i64 },
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "missing required fields"),
            KernelError::Parse => write!(f, "malformed request input"),
            KernelError::NotFound { id } => write!(f, "book with id {id} not found"),
            KernelError::Internal => write!(f, "internal store error"),
        }
    }
}

impl Context for KernelError {}
