use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type CardUuid = String;
pub type ServiceUrl = String;

/// Urgency classification of a card. Anything outside the four known
/// indicators (including a missing one) deserializes to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Severity {
    /// Display priority, higher first. `Unknown` sits below `Info`.
    pub fn rank(self) -> i8 {
        match self {
            Severity::Error => 3,
            Severity::Critical => 2,
            Severity::Warning => 1,
            Severity::Info => 0,
            Severity::Unknown => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Source {
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.url.is_none() && self.icon.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Suggestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Value>,
}

impl Suggestion {
    pub fn is_actionable(&self) -> bool {
        self.label.as_deref().is_some_and(|label| !label.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Absolute,
    Smart,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
}

impl Link {
    pub fn is_smart(&self) -> bool {
        self.link_type == LinkType::Smart
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OverrideReason {
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default)]
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<CardUuid>,
    #[serde(default)]
    pub indicator: Severity,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub override_reasons: Vec<OverrideReason>,
    #[serde(default)]
    pub service_url: ServiceUrl,
}

impl Card {
    /// Store key for this card, if it can be addressed at all.
    pub fn key(&self) -> Option<CardKey> {
        self.uuid.as_ref().map(|uuid| CardKey {
            service_url: self.service_url.clone(),
            card_uuid: uuid.clone(),
        })
    }
}

/// Inbound response shape: `{ "cards": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CardResponse {
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardKey {
    pub service_url: ServiceUrl,
    pub card_uuid: CardUuid,
}
