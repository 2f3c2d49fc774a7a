use std::sync::Arc;

use tokio::{runtime::Handle, task::JoinHandle};

use crate::{
    feedback::{
        error::{FeedbackError, internal_error, signing_failed},
        ports::{FeedbackDelivery, FeedbackTransport},
        types::{FeedbackEnvelope, FeedbackOutcome, FeedbackRecord},
    },
    signing::TokenSigner,
};

pub const FEEDBACK_PATH_SEGMENT: &str = "feedback";

pub fn feedback_endpoint(service_url: &str) -> String {
    format!(
        "{}/{}",
        service_url.trim_end_matches('/'),
        FEEDBACK_PATH_SEGMENT
    )
}

#[derive(Debug)]
enum DeliveryTask {
    Spawned(JoinHandle<Result<(), FeedbackError>>),
    /// Never started, e.g. no runtime to spawn on.
    NotStarted(FeedbackError),
}

/// Detached delivery task. Dropping the handle leaves the delivery running;
/// awaiting it is only for callers that want to observe the result.
#[derive(Debug)]
pub struct DispatchHandle {
    card: String,
    outcome: FeedbackOutcome,
    task: DeliveryTask,
}

impl DispatchHandle {
    pub fn card(&self) -> &str {
        &self.card
    }

    pub fn outcome_kind(&self) -> FeedbackOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        match &self.task {
            DeliveryTask::Spawned(task) => task.is_finished(),
            DeliveryTask::NotStarted(_) => true,
        }
    }

    pub async fn outcome(self) -> Result<(), FeedbackError> {
        match self.task {
            DeliveryTask::Spawned(task) => match task.await {
                Ok(result) => result,
                Err(err) => Err(internal_error(format!("feedback task join failed: {err}"))),
            },
            DeliveryTask::NotStarted(err) => Err(err),
        }
    }
}

/// Signs and sends feedback records without blocking the caller.
///
/// There is no deduplication and no retry: every call produces one delivery
/// attempt, and a failed attempt is logged and dropped.
#[derive(Clone)]
pub struct FeedbackDispatcher {
    signer: Arc<dyn TokenSigner>,
    transport: Arc<dyn FeedbackTransport>,
}

impl FeedbackDispatcher {
    pub fn new(signer: Arc<dyn TokenSigner>, transport: Arc<dyn FeedbackTransport>) -> Self {
        Self { signer, transport }
    }

    /// Delivery is spawned on the current tokio runtime. Outside a runtime the
    /// record is dropped and the returned handle resolves to an internal error.
    pub fn dispatch(&self, service_url: &str, record: FeedbackRecord) -> DispatchHandle {
        let endpoint = feedback_endpoint(service_url);
        let card = record.card.clone();
        let outcome = record.outcome;
        tracing::debug!(
            target: "feedback",
            endpoint = %endpoint,
            card = %card,
            outcome = ?outcome,
            "feedback_dispatched"
        );

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                let err = internal_error(format!("no tokio runtime to deliver feedback: {err}"));
                tracing::warn!(
                    target: "feedback",
                    endpoint = %endpoint,
                    card = %card,
                    kind = ?err.kind,
                    error = %err,
                    "feedback_dispatch_failed"
                );
                return DispatchHandle {
                    card,
                    outcome,
                    task: DeliveryTask::NotStarted(err),
                };
            }
        };

        let signed = self
            .signer
            .sign(&endpoint)
            .map_err(|err| signing_failed(format!("failed to sign feedback token: {err}")));
        let transport = Arc::clone(&self.transport);
        let task_card = card.clone();

        let task = runtime.spawn(async move {
            let result = match signed {
                Ok(bearer_token) => {
                    transport
                        .deliver(FeedbackDelivery {
                            endpoint: endpoint.clone(),
                            bearer_token,
                            envelope: FeedbackEnvelope::from(record),
                        })
                        .await
                }
                Err(err) => Err(err),
            };

            match &result {
                Ok(()) => tracing::debug!(
                    target: "feedback",
                    endpoint = %endpoint,
                    card = %task_card,
                    "feedback_delivered"
                ),
                Err(err) => tracing::warn!(
                    target: "feedback",
                    endpoint = %endpoint,
                    card = %task_card,
                    kind = ?err.kind,
                    error = %err,
                    "feedback_dispatch_failed"
                ),
            }
            result
        });

        DispatchHandle {
            card,
            outcome,
            task: DeliveryTask::Spawned(task),
        }
    }
}
