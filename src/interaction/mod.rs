pub mod callbacks;
pub mod dismissal;
pub mod session;
pub mod suggestion;

pub use callbacks::{AppLaunchHook, InteractionCallbacks, TakeSuggestionHook};
pub use dismissal::{DismissalHandler, DismissalOutcome};
pub use session::CardSession;
pub use suggestion::{SuggestionHandler, SuggestionOutcome};
