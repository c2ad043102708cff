use std::fmt;
use ureq::Error;

pub enum OpenMeteoError {
    OpenMeteo(String),
    Document(String),
}

impl fmt::Display for OpenMeteoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OpenMeteoError::OpenMeteo(e) => write!(f, "OpenMeteoError::OpenMeteo: {}", e),
            OpenMeteoError::Document(e) => write!(f, "OpenMeteoError::Document: {}", e),
        }
    }
}
impl fmt::Debug for OpenMeteoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
impl std::error::Error for OpenMeteoError {}
impl From<Error> for OpenMeteoError {
    fn from(e: Error) -> Self {
        OpenMeteoError::OpenMeteo(e.to_string())
    }
}
impl From<serde_json::Error> for OpenMeteoError {
    fn from(e: serde_json::Error) -> Self {
        OpenMeteoError::Document(e.to_string())
    }
}
