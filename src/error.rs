use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacerError {
    #[error("Invalid project URL: {0}")]
    InvalidProjectUrl(String),

    #[error("Unsupported owner type: {0}")]
    UnsupportedOwnerType(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Field not found: {0}")]
    FieldNotFound(String),

    #[error("No iterations configured on field {0}")]
    NoIterations(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("GraphQL error: {0}")]
    GraphQLError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl PlacerError {
    /// True for failures raised while validating inputs, before any remote call.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PlacerError::InvalidProjectUrl(_)
                | PlacerError::UnsupportedOwnerType(_)
                | PlacerError::ConfigError(_)
        )
    }
}

pub type PlacerResult<T> = Result<T, PlacerError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> PlacerResult<T>;
    fn with_context<F>(self, f: F) -> PlacerResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> PlacerResult<T> {
        self.map_err(|e| PlacerError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> PlacerResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PlacerError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> PlacerResult<T> {
        self.ok_or_else(|| PlacerError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> PlacerResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| PlacerError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! placer_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::PlacerError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::PlacerError::$error_type(format!($fmt, $($arg)*))
    };
}
