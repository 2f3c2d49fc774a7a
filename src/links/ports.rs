use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationError {
    pub message: String,
}

impl NavigationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NavigationError {}

/// Opens a URL in a new, unrelated navigation context. Nothing is handed
/// back to the caller beyond whether the hand-off happened.
pub trait Navigator: Send + Sync {
    fn open_detached(&self, url: &str) -> Result<(), NavigationError>;
}
