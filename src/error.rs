use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnackbarError {
    #[error("Fixture file not found: {}", .0.display())]
    FixtureNotFound(PathBuf),

    #[error("Invalid fixture JSON: {0}")]
    InvalidFixture(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
