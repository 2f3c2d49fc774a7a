use std::sync::Arc;

use crate::{
    links::LaunchOutcome,
    types::{Link, Suggestion},
};

pub type TakeSuggestionHook = Arc<dyn Fn(&Suggestion) + Send + Sync>;
pub type AppLaunchHook = Arc<dyn Fn(&Link, &LaunchOutcome) + Send + Sync>;

/// Caller-supplied reactions to user actions.
#[derive(Clone)]
pub struct InteractionCallbacks {
    pub take_suggestion: TakeSuggestionHook,
    /// Fired after every link click, whether or not anything was opened.
    pub on_app_launch: Option<AppLaunchHook>,
}

impl InteractionCallbacks {
    pub fn new(take_suggestion: impl Fn(&Suggestion) + Send + Sync + 'static) -> Self {
        Self {
            take_suggestion: Arc::new(take_suggestion),
            on_app_launch: None,
        }
    }

    pub fn with_app_launch(
        mut self,
        on_app_launch: impl Fn(&Link, &LaunchOutcome) + Send + Sync + 'static,
    ) -> Self {
        self.on_app_launch = Some(Arc::new(on_app_launch));
        self
    }
}
