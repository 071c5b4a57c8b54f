use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    // Network-specific errors
    #[error("Network timeout while fetching page: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Specific HTTP status code errors
    #[error("Page not found (404): {url}")]
    HttpNotFound { url: String },

    #[error("HTTP client error ({status}): {message} (URL: {url})")]
    HttpClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("HTTP server error ({status}): {message} (URL: {url})")]
    HttpServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Page returned an empty body: {url}")]
    EmptyResponse { url: String },

    // Markup errors, absorbed by the section parsers
    #[error("Invalid CSS selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    // Output errors
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("Nothing to write: the page produced no sheets ({path})")]
    NothingToWrite { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a page not found error
    pub fn http_not_found(url: impl Into<String>) -> Self {
        Self::HttpNotFound { url: url.into() }
    }

    /// Create an HTTP client error (4xx status codes except 404)
    pub fn http_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::HttpClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an HTTP server error (5xx status codes)
    pub fn http_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::HttpServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an empty response error
    pub fn empty_response(url: impl Into<String>) -> Self {
        Self::EmptyResponse { url: url.into() }
    }

    /// Create an invalid selector error
    pub fn selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Create an error for a scrape that produced no sheets at all
    pub fn nothing_to_write(path: impl Into<String>) -> Self {
        Self::NothingToWrite { path: path.into() }
    }

    /// True for failures that happen before any markup is available.
    /// These abort the scrape without writing a workbook.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AppError::Fetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::HttpNotFound { .. }
                | AppError::HttpClientError { .. }
                | AppError::HttpServerError { .. }
                | AppError::EmptyResponse { .. }
        )
    }

    /// True for failures while creating the output directory or writing the workbook
    pub fn is_write_failure(&self) -> bool {
        matches!(
            self,
            AppError::Workbook(_) | AppError::Io(_) | AppError::NothingToWrite { .. }
        )
    }
}
