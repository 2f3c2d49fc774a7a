use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackErrorKind {
    Signing,
    Transport,
    HttpStatus,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackError {
    pub kind: FeedbackErrorKind,
    pub message: String,
    pub http_status: Option<u16>,
}

impl FeedbackError {
    pub fn new(kind: FeedbackErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            http_status: None,
        }
    }

    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.http_status {
            Some(status) => write!(f, "{} (status={})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for FeedbackError {}

pub fn signing_failed(message: impl Into<String>) -> FeedbackError {
    FeedbackError::new(FeedbackErrorKind::Signing, message)
}

pub fn transport_failed(message: impl Into<String>) -> FeedbackError {
    FeedbackError::new(FeedbackErrorKind::Transport, message)
}

pub fn internal_error(message: impl Into<String>) -> FeedbackError {
    FeedbackError::new(FeedbackErrorKind::Internal, message)
}

/// Maps a non-success response, keeping a bounded slice of the body.
pub fn map_http_status(status: u16, body: &str) -> FeedbackError {
    let normalized_body = body.chars().take(240).collect::<String>();
    let message = if normalized_body.is_empty() {
        format!("feedback endpoint returned status {status}")
    } else {
        format!("feedback endpoint returned status {status}: {normalized_body}")
    };
    FeedbackError::new(FeedbackErrorKind::HttpStatus, message).with_http_status(status)
}
