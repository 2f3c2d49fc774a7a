use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Live,
    /// Full card structure is produced, but no feedback is sent, no store
    /// mutation is requested and no link is opened.
    Demonstration,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Live => "live",
            Mode::Demonstration => "demonstration",
        }
    }
}

/// Context handed to every interaction handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionContext {
    pub mode: Mode,
}

impl InteractionContext {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn live() -> Self {
        Self::new(Mode::Live)
    }

    pub fn demonstration() -> Self {
        Self::new(Mode::Demonstration)
    }

    pub fn is_demonstration(&self) -> bool {
        self.mode == Mode::Demonstration
    }

    /// Runs a side-effecting step only in live mode.
    pub fn admit<T>(&self, action: &'static str, effect: impl FnOnce() -> T) -> Option<T> {
        match self.mode {
            Mode::Live => Some(effect()),
            Mode::Demonstration => {
                tracing::debug!(target: "mode", action, "side_effect_suppressed");
                None
            }
        }
    }
}
