pub mod composer;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod ports;
pub mod types;

pub use composer::{compose_accepted, compose_overridden};
pub use dispatcher::{DispatchHandle, FEEDBACK_PATH_SEGMENT, FeedbackDispatcher, feedback_endpoint};
pub use error::{FeedbackError, FeedbackErrorKind};
pub use http::HttpFeedbackTransport;
pub use ports::{FeedbackDelivery, FeedbackTransport};
pub use types::{
    AcceptedSuggestion, FeedbackEnvelope, FeedbackOutcome, FeedbackRecord, OverrideReasonCode,
    OverrideReasonRecord,
};
