use std::sync::Arc;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::{
    links::ports::Navigator,
    mode::InteractionContext,
    types::{Link, LinkType},
};

pub const UNLAUNCHABLE_SMART_NOTICE: &str =
    "Cannot launch SMART link without a SMART-enabled FHIR server";
pub const BLOCKED_LINK_NOTICE: &str = "This link reported an error and cannot be launched";

/// Pre-provisioned SMART launch parameters appended to `smart` links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchContext {
    pub iss: String,
    pub launch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub url: Option<String>,
    /// Pre-flagged with `error`, or a `smart` link that could not be bound
    /// to a launch context.
    pub unlaunchable: bool,
    pub notice: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LaunchOutcome {
    Suppressed,
    Blocked { notice: &'static str },
    Unresolved,
    Launched { url: String },
    NavigationFailed { url: String, message: String },
}

impl LaunchOutcome {
    pub fn launched_url(&self) -> Option<&str> {
        match self {
            LaunchOutcome::Launched { url } => Some(url),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct LinkResolver {
    context: Option<LaunchContext>,
    navigator: Arc<dyn Navigator>,
}

impl LinkResolver {
    pub fn new(context: Option<LaunchContext>, navigator: Arc<dyn Navigator>) -> Self {
        Self { context, navigator }
    }

    pub fn launch_context(&self) -> Option<&LaunchContext> {
        self.context.as_ref()
    }

    /// Only `smart` links are ever given a launchable URL; `absolute` links
    /// resolve to `None` but are not flagged as unlaunchable unless they
    /// carry `error`.
    pub fn resolve(&self, link: &Link) -> ResolvedLink {
        if link.error {
            return ResolvedLink {
                url: None,
                unlaunchable: true,
                notice: Some(BLOCKED_LINK_NOTICE),
            };
        }

        let url = match link.link_type {
            LinkType::Smart => self.bind_launch_context(link),
            LinkType::Absolute | LinkType::Other => None,
        };
        let unlaunchable = link.is_smart() && url.is_none();

        ResolvedLink {
            url,
            unlaunchable,
            notice: unlaunchable.then_some(UNLAUNCHABLE_SMART_NOTICE),
        }
    }

    pub fn launch(&self, context: &InteractionContext, link: &Link) -> LaunchOutcome {
        context
            .admit("launch_link", || self.launch_live(link))
            .unwrap_or(LaunchOutcome::Suppressed)
    }

    fn launch_live(&self, link: &Link) -> LaunchOutcome {
        if link.error {
            tracing::warn!(target: "links", label = %link.label, "link_launch_blocked");
            return LaunchOutcome::Blocked {
                notice: BLOCKED_LINK_NOTICE,
            };
        }

        let Some(url) = self.resolve(link).url else {
            tracing::debug!(
                target: "links",
                label = %link.label,
                link_type = ?link.link_type,
                "link_unresolved"
            );
            return LaunchOutcome::Unresolved;
        };

        match self.navigator.open_detached(&url) {
            Ok(()) => {
                tracing::info!(target: "links", label = %link.label, url = %url, "link_launched");
                LaunchOutcome::Launched { url }
            }
            Err(err) => {
                tracing::warn!(
                    target: "links",
                    label = %link.label,
                    url = %url,
                    error = %err,
                    "link_navigation_failed"
                );
                LaunchOutcome::NavigationFailed {
                    url,
                    message: err.to_string(),
                }
            }
        }
    }

    fn bind_launch_context(&self, link: &Link) -> Option<String> {
        let context = self.context.as_ref()?;
        let raw = link.url.as_deref()?;
        let mut url = match Url::parse(raw) {
            Ok(url) => url,
            Err(err) => {
                tracing::debug!(target: "links", url = %raw, error = %err, "smart_link_url_invalid");
                return None;
            }
        };

        url.query_pairs_mut()
            .append_pair("iss", &context.iss)
            .append_pair("launch", &context.launch);
        Some(url.to_string())
    }
}
