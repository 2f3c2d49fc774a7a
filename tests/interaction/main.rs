mod dismissal;
mod session;

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use cds_cards::{
    feedback::{FeedbackDelivery, FeedbackDispatcher, FeedbackError, FeedbackTransport,
        error::transport_failed},
    interaction::{CardSession, InteractionCallbacks},
    links::{LaunchContext, LinkResolver, NavigationError, Navigator},
    mode::{InteractionContext, Mode},
    signing::{SigningError, TokenSigner},
    store::{CardStore, InMemoryCardStore},
    types::{Card, CardKey, CardResponse, Link, LinkType, OverrideReason, Severity, Suggestion},
};
use tokio::sync::mpsc;

pub const SERVICE_URL: &str = "https://svc.example/cds-services/demo";

pub struct StaticTokenSigner;

impl TokenSigner for StaticTokenSigner {
    fn sign(&self, audience: &str) -> Result<String, SigningError> {
        Ok(format!("token-for:{audience}"))
    }
}

pub struct RecordingTransport {
    tx: mpsc::UnboundedSender<FeedbackDelivery>,
    fail: bool,
}

#[async_trait]
impl FeedbackTransport for RecordingTransport {
    async fn deliver(&self, delivery: FeedbackDelivery) -> Result<(), FeedbackError> {
        let _ = self.tx.send(delivery);
        if self.fail {
            return Err(transport_failed("connection refused"));
        }
        Ok(())
    }
}

/// Card store that remembers every removal request it received.
pub struct RecordingStore {
    inner: InMemoryCardStore,
    pub removed: Mutex<Vec<CardKey>>,
}

impl RecordingStore {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            inner: InMemoryCardStore::new(CardResponse { cards }),
            removed: Mutex::new(Vec::new()),
        }
    }

    pub fn removed(&self) -> Vec<CardKey> {
        self.removed.lock().expect("store lock").clone()
    }
}

impl CardStore for RecordingStore {
    fn get_cards(&self) -> CardResponse {
        self.inner.get_cards()
    }

    fn remove_card(&self, key: CardKey) {
        self.removed.lock().expect("store lock").push(key.clone());
        self.inner.remove_card(key);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub opened: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn open_detached(&self, url: &str) -> Result<(), NavigationError> {
        self.opened
            .lock()
            .expect("navigator lock")
            .push(url.to_string());
        Ok(())
    }
}

pub struct Harness {
    pub session: CardSession,
    pub store: Arc<RecordingStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub deliveries: mpsc::UnboundedReceiver<FeedbackDelivery>,
    pub taken: Arc<Mutex<Vec<Option<String>>>>,
    pub launches: Arc<AtomicUsize>,
}

impl Harness {
    pub fn live(cards: Vec<Card>) -> Self {
        Self::build(Mode::Live, cards, false)
    }

    pub fn demonstration(cards: Vec<Card>) -> Self {
        Self::build(Mode::Demonstration, cards, false)
    }

    pub fn live_with_failing_transport(cards: Vec<Card>) -> Self {
        Self::build(Mode::Live, cards, true)
    }

    fn build(mode: Mode, cards: Vec<Card>, fail: bool) -> Self {
        let (tx, deliveries) = mpsc::unbounded_channel();
        let store = Arc::new(RecordingStore::new(cards));
        let navigator = Arc::new(RecordingNavigator::default());
        let taken = Arc::new(Mutex::new(Vec::new()));
        let launches = Arc::new(AtomicUsize::new(0));

        let taken_hook = Arc::clone(&taken);
        let launches_hook = Arc::clone(&launches);
        let callbacks = InteractionCallbacks::new(move |suggestion: &Suggestion| {
            taken_hook
                .lock()
                .expect("taken lock")
                .push(suggestion.label.clone());
        })
        .with_app_launch(move |_link, _outcome| {
            launches_hook.fetch_add(1, Ordering::SeqCst);
        });

        let session = CardSession::new(
            InteractionContext::new(mode),
            store.clone(),
            FeedbackDispatcher::new(
                Arc::new(StaticTokenSigner),
                Arc::new(RecordingTransport { tx, fail }),
            ),
            LinkResolver::new(
                Some(LaunchContext {
                    iss: "https://launch.smarthealthit.org/v/r4/fhir".to_string(),
                    launch: "abc".to_string(),
                }),
                navigator.clone(),
            ),
            callbacks,
        );

        Self {
            session,
            store,
            navigator,
            deliveries,
            taken,
            launches,
        }
    }

    pub fn taken(&self) -> Vec<Option<String>> {
        self.taken.lock().expect("taken lock").clone()
    }

    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    pub fn opened(&self) -> Vec<String> {
        self.navigator.opened.lock().expect("navigator lock").clone()
    }

    /// Deliveries already handed to the transport, without waiting for more.
    pub fn drain_deliveries(&mut self) -> Vec<FeedbackDelivery> {
        let mut drained = Vec::new();
        while let Ok(delivery) = self.deliveries.try_recv() {
            drained.push(delivery);
        }
        drained
    }
}

pub fn card(uuid: Option<&str>, indicator: Severity, summary: &str) -> Card {
    Card {
        uuid: uuid.map(str::to_string),
        indicator,
        summary: summary.to_string(),
        detail: None,
        source: None,
        suggestions: Vec::new(),
        links: Vec::new(),
        override_reasons: Vec::new(),
        service_url: SERVICE_URL.to_string(),
    }
}

pub fn suggestion(label: Option<&str>, uuid: Option<&str>) -> Suggestion {
    Suggestion {
        label: label.map(str::to_string),
        uuid: uuid.map(str::to_string),
        actions: Vec::new(),
    }
}

pub fn override_reason(code: &str, system: Option<&str>, display: &str) -> OverrideReason {
    OverrideReason {
        code: code.to_string(),
        system: system.map(str::to_string),
        display: display.to_string(),
    }
}

pub fn smart_link(label: &str, url: &str) -> Link {
    Link {
        label: label.to_string(),
        url: Some(url.to_string()),
        link_type: LinkType::Smart,
        error: false,
    }
}

/// A card exercising every interactive surface.
pub fn full_card(uuid: &str) -> Card {
    let mut full = card(Some(uuid), Severity::Warning, "Interaction detected");
    full.suggestions = vec![suggestion(Some("Order"), Some("s1"))];
    full.links = vec![smart_link("App", "https://app.example/launch")];
    full.override_reasons = vec![override_reason(
        "X",
        Some("http://example.org/reasons"),
        "Not relevant",
    )];
    full
}
