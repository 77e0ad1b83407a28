use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldError {
    #[error("Invalid parameters: {width} x {height} field with {mines} mines")]
    InvalidParameters { width: u16, height: u16, mines: u32 },
    #[error("Could not write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not read a seed from the OS entropy source: {0}")]
    Entropy(String),
}

pub type Result<T> = core::result::Result<T, FieldError>;
