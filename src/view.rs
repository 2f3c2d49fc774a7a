use serde::Serialize;

use crate::{
    links::LinkResolver,
    mode::InteractionContext,
    ordering::OrderedCards,
    types::{Card, OverrideReason, Severity, Source},
};

pub const DISMISS_LABEL: &str = "Dismiss";

/// What a front end draws for the current card set. Produced identically in
/// both modes apart from withheld source URLs in demonstration mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "cards", rename_all = "snake_case")]
pub enum RenderedCards {
    NoCards,
    Cards(Vec<CardView>),
}

impl RenderedCards {
    pub fn views(&self) -> &[CardView] {
        match self {
            RenderedCards::NoCards => &[],
            RenderedCards::Cards(views) => views,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub uuid: Option<String>,
    pub service_url: String,
    pub indicator: Severity,
    pub summary: String,
    /// Markdown, passed through untouched.
    pub detail: Option<String>,
    pub source: Option<SourceView>,
    pub suggestions: Vec<SuggestionButton>,
    pub links: Vec<LinkButton>,
    pub dismiss: Option<DismissAffordance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceView {
    pub label: String,
    pub url: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionButton {
    pub label: Option<String>,
    pub uuid: Option<String>,
    pub actionable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkButton {
    pub label: String,
    pub url: Option<String>,
    pub disabled: bool,
    pub notice: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DismissAffordance {
    Plain {
        label: &'static str,
    },
    WithReasons {
        label: &'static str,
        options: Vec<OverrideOption>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideOption {
    pub label: String,
    pub reason: OverrideReason,
}

pub fn render_cards(
    context: &InteractionContext,
    resolver: &LinkResolver,
    ordered: &OrderedCards,
) -> RenderedCards {
    match ordered {
        OrderedCards::NoCards => RenderedCards::NoCards,
        OrderedCards::Cards(cards) => RenderedCards::Cards(
            cards
                .iter()
                .map(|card| render_card(context, resolver, card))
                .collect(),
        ),
    }
}

pub fn render_card(context: &InteractionContext, resolver: &LinkResolver, card: &Card) -> CardView {
    CardView {
        uuid: card.uuid.clone(),
        service_url: card.service_url.clone(),
        indicator: card.indicator,
        summary: card.summary.clone(),
        detail: card.detail.clone().filter(|detail| !detail.is_empty()),
        source: card
            .source
            .as_ref()
            .and_then(|source| render_source(context, source)),
        suggestions: card
            .suggestions
            .iter()
            .map(|suggestion| SuggestionButton {
                label: suggestion.label.clone(),
                uuid: suggestion.uuid.clone(),
                actionable: suggestion.is_actionable(),
            })
            .collect(),
        links: card
            .links
            .iter()
            .map(|link| {
                let resolved = resolver.resolve(link);
                LinkButton {
                    label: link.label.clone(),
                    url: resolved.url,
                    disabled: resolved.unlaunchable,
                    notice: resolved.notice,
                }
            })
            .collect(),
        dismiss: render_dismiss(card),
    }
}

fn render_source(context: &InteractionContext, source: &Source) -> Option<SourceView> {
    if source.is_empty() {
        return None;
    }
    let label = source.label.clone().filter(|label| !label.is_empty())?;

    Some(SourceView {
        label,
        url: if context.is_demonstration() {
            None
        } else {
            source.url.clone()
        },
        icon: source.icon.clone(),
    })
}

fn render_dismiss(card: &Card) -> Option<DismissAffordance> {
    card.uuid.as_ref()?;

    if card.override_reasons.is_empty() {
        return Some(DismissAffordance::Plain {
            label: DISMISS_LABEL,
        });
    }

    Some(DismissAffordance::WithReasons {
        label: DISMISS_LABEL,
        options: card
            .override_reasons
            .iter()
            .map(|reason| OverrideOption {
                label: format!("Override: {}", reason.display),
                reason: reason.clone(),
            })
            .collect(),
    })
}
