pub mod ports;
pub mod resolver;
pub mod system;

pub use ports::{NavigationError, Navigator};
pub use resolver::{
    BLOCKED_LINK_NOTICE, LaunchContext, LaunchOutcome, LinkResolver, ResolvedLink,
    UNLAUNCHABLE_SMART_NOTICE,
};
pub use system::SystemNavigator;
