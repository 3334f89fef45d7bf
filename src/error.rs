use miette::Diagnostic;
use thiserror::Error;

/// Main error type for wordpx operations
#[derive(Error, Diagnostic, Debug)]
pub enum WordpxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(wordpx::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(wordpx::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// The byte buffer is not a structurally valid PNG container.
    ///
    /// Covers a missing or garbled signature and chunks whose length
    /// fields claim more bytes than the buffer holds. A well-formed PNG
    /// that simply carries no embedded project is *not* corrupt; that
    /// case is `Ok(None)` on extraction.
    #[error("Corrupt PNG container: {message}")]
    #[diagnostic(code(wordpx::corrupt))]
    CorruptContainer {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid project payload: {message}")]
    #[diagnostic(code(wordpx::payload))]
    Payload {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(wordpx::params))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(wordpx::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(wordpx::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, WordpxError>;
