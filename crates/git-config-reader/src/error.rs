use std::string::FromUtf8Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The key has no value in the requested scope.
    #[error("the key was not found")]
    NotFound,

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("malformed remote URL {url:?}: {reason}")]
    MalformedRemoteUrl { url: String, reason: String },
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("failed to run {program:?}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    // `code` is `None` when the process was terminated by a signal.
    #[error("{program:?} exited with {}: {stderr}", display_code(.code))]
    Status {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("config value is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Turns the not-found signal into `None` so defaults can be applied with
/// `unwrap_or_else`.
pub trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for Result<T> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
