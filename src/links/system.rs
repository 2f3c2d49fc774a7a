use crate::links::ports::{NavigationError, Navigator};

/// Hands URLs to the platform's default browser.
#[derive(Debug, Clone, Default)]
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open_detached(&self, url: &str) -> Result<(), NavigationError> {
        open::that_detached(url)
            .map_err(|err| NavigationError::new(format!("failed to open {url}: {err}")))
    }
}
