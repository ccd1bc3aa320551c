//! Fatal errors of the terminal application.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AppError {
    #[error("Failed to set up the terminal: {0}")]
    #[diagnostic(
        code("DISCOVERY::TERMINAL"),
        help("Run discovery-wizard from an interactive terminal (not a pipe or dumb TERM)")
    )]
    Terminal(#[source] std::io::Error),

    #[error("Failed to start the async runtime: {0}")]
    #[diagnostic(code("DISCOVERY::RUNTIME"))]
    Runtime(#[source] std::io::Error),

    #[error("Failed to draw the interface: {0}")]
    #[diagnostic(
        code("DISCOVERY::RENDER"),
        help("The terminal may have been resized below the minimum or closed")
    )]
    Render(#[source] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
