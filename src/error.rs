use thiserror::Error;

#[derive(Error, Debug)]
pub enum OctoError {
    #[error("API URL not configured. Set OCTOFIT_API_URL or run 'octofit config --api-url <URL>'.")]
    ApiUrlNotSet,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed ({status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type OctoResult<T> = Result<T, OctoError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> OctoResult<T>;
    fn with_context<F>(self, f: F) -> OctoResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> OctoResult<T> {
        self.map_err(|e| OctoError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> OctoResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| OctoError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> OctoResult<T> {
        self.ok_or_else(|| OctoError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> OctoResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| OctoError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! octo_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::OctoError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::OctoError::$error_type(format!($fmt, $($arg)*))
    };
}
