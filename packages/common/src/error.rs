use stencil_template::CompileError;
use thiserror::Error;

/// Common error type that can hold any stencil error
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
