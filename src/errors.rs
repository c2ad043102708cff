use std::fmt;
use std::fmt::Formatter;
use crate::manager_open_meteo::errors::OpenMeteoError;
use crate::reconstruction::ReconstructError;

pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

pub struct LoggingError(pub String);

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "LoggingError: {}", self.0)
    }
}
impl From<std::io::Error> for LoggingError {
    fn from(e: std::io::Error) -> Self {
        LoggingError(e.to_string())
    }
}
impl From<log4rs::config::runtime::ConfigErrors> for LoggingError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        LoggingError(e.to_string())
    }
}
impl From<log::SetLoggerError> for LoggingError {
    fn from(e: log::SetLoggerError) -> Self {
        LoggingError(e.to_string())
    }
}

pub enum BackupError {
    File(String),
    Document(String),
    Pattern(String),
}

impl fmt::Display for BackupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BackupError::File(e) => write!(f, "BackupError::File: {}", e),
            BackupError::Document(e) => write!(f, "BackupError::Document: {}", e),
            BackupError::Pattern(e) => write!(f, "BackupError::Pattern: {}", e),
        }
    }
}
impl fmt::Debug for BackupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
impl From<std::io::Error> for BackupError {
    fn from(e: std::io::Error) -> Self {
        BackupError::File(e.to_string())
    }
}
impl From<serde_json::Error> for BackupError {
    fn from(e: serde_json::Error) -> Self {
        BackupError::Document(e.to_string())
    }
}
impl From<glob::PatternError> for BackupError {
    fn from(e: glob::PatternError) -> Self {
        BackupError::Pattern(e.to_string())
    }
}
impl From<chrono::ParseError> for BackupError {
    fn from(e: chrono::ParseError) -> Self {
        BackupError::Pattern(e.to_string())
    }
}

pub struct MeteoGridInitError(pub String);

impl fmt::Display for MeteoGridInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "MeteoGridInitError: {}", self.0)
    }
}
impl fmt::Debug for MeteoGridInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
impl std::error::Error for MeteoGridInitError {}
impl From<ConfigError> for MeteoGridInitError {
    fn from(e: ConfigError) -> Self {
        MeteoGridInitError(e.to_string())
    }
}
impl From<LoggingError> for MeteoGridInitError {
    fn from(e: LoggingError) -> Self {
        MeteoGridInitError(e.to_string())
    }
}

pub struct MeteoGridRunError(pub String);

impl fmt::Display for MeteoGridRunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "MeteoGridRunError: {}", self.0)
    }
}
impl fmt::Debug for MeteoGridRunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
impl std::error::Error for MeteoGridRunError {}
impl From<OpenMeteoError> for MeteoGridRunError {
    fn from(e: OpenMeteoError) -> Self {
        MeteoGridRunError(e.to_string())
    }
}
impl From<ReconstructError> for MeteoGridRunError {
    fn from(e: ReconstructError) -> Self {
        MeteoGridRunError(e.to_string())
    }
}
impl From<BackupError> for MeteoGridRunError {
    fn from(e: BackupError) -> Self {
        MeteoGridRunError(e.to_string())
    }
}
